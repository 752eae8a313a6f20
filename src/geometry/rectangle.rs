//! Axis-aligned rectangles produced by the layout

use num_traits::Float;

/// Axis-aligned rectangle stored as its two opposite corners
///
/// Well-formed layout output always satisfies `x2 >= x1` and `y2 >= y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle<T = f64> {
    /// Left edge
    pub x1: T,
    /// Top edge
    pub y1: T,
    /// Right edge
    pub x2: T,
    /// Bottom edge
    pub y2: T,
}

impl<T: Float> Rectangle<T> {
    /// Create a rectangle from its corner coordinates
    pub const fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a rectangle from an origin and a size
    pub fn from_origin_size(x: T, y: T, width: T, height: T) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Horizontal extent
    pub fn width(&self) -> T {
        self.x2 - self.x1
    }

    /// Vertical extent
    pub fn height(&self) -> T {
        self.y2 - self.y1
    }

    /// Enclosed area
    pub fn area(&self) -> T {
        self.width() * self.height()
    }

    /// Whether all four coordinates are finite
    ///
    /// Degenerate containers propagate NaN or infinity into coordinates,
    /// so consumers check this before drawing anything.
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    /// Whether a point lies inside the rectangle
    ///
    /// The left and top edges are inclusive, the right and bottom edges
    /// exclusive, so a point on a shared edge belongs to exactly one of two
    /// adjacent rectangles.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// Whether `other` lies within this rectangle, allowing `tolerance` of slack on every edge
    pub fn contains(&self, other: &Self, tolerance: T) -> bool {
        other.x1 >= self.x1 - tolerance
            && other.y1 >= self.y1 - tolerance
            && other.x2 <= self.x2 + tolerance
            && other.y2 <= self.y2 + tolerance
    }

    /// Area of the intersection of the two interiors, zero when they are disjoint
    pub fn overlap_area(&self, other: &Self) -> T {
        let overlap_width = self.x2.min(other.x2) - self.x1.max(other.x1);
        let overlap_height = self.y2.min(other.y2) - self.y1.max(other.y1);
        if overlap_width <= T::zero() || overlap_height <= T::zero() {
            T::zero()
        } else {
            overlap_width * overlap_height
        }
    }
}
