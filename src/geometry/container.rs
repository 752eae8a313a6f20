//! Remaining free region during a layout pass
//!
//! A container never changes once built. Committing a row produces a fresh,
//! smaller container through [`Container::cut_area`], so every intermediate
//! region of a pass can be inspected independently.

use num_traits::Float;

use crate::geometry::rectangle::Rectangle;
use crate::math::normalize::total;

/// Unallocated rectangular region that rows are packed into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container<T = f64> {
    /// Left edge of the free region
    pub x: T,
    /// Top edge of the free region
    pub y: T,
    /// Free horizontal extent
    pub width: T,
    /// Free vertical extent
    pub height: T,
}

impl<T: Float> Container<T> {
    /// Create a container at the given origin
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The shorter of the two sides, used as the reference length for row quality
    pub fn shortest_edge(&self) -> T {
        self.width.min(self.height)
    }

    /// Strips are laid against the longer side; wide containers receive vertical strips
    fn is_wide(&self) -> bool {
        self.width >= self.height
    }

    /// Place a row of weights as one strip along the leading edge
    ///
    /// In a wide container the strip spans the full height, is
    /// `sum(row) / height` thick, and cells are stacked top to bottom. In a
    /// tall container the strip spans the full width and cells run left to
    /// right. A row summing to zero, or a container that has no extent left
    /// along the strip, collapses to zero-size cells at the container origin.
    pub fn coordinates_for(&self, row: &[T]) -> Vec<Rectangle<T>> {
        let row_area = total(row);
        let wide = self.is_wide();
        let span = if wide { self.height } else { self.width };
        let thickness = if row_area > T::zero() && span > T::zero() {
            row_area / span
        } else {
            T::zero()
        };

        let mut offset = if wide { self.y } else { self.x };
        row.iter()
            .map(|&value| {
                let length = if thickness > T::zero() {
                    value / thickness
                } else {
                    T::zero()
                };
                let rect = if wide {
                    Rectangle::new(self.x, offset, self.x + thickness, offset + length)
                } else {
                    Rectangle::new(offset, self.y, offset + length, self.y + thickness)
                };
                offset = offset + length;
                rect
            })
            .collect()
    }

    /// Remove a strip of the given area from the leading edge
    ///
    /// Mirrors the orientation of [`Self::coordinates_for`]. Dimensions are
    /// clamped at zero so rounding never yields a negative extent, and a
    /// container with no extent along the strip is returned unchanged.
    #[must_use]
    pub fn cut_area(self, area: T) -> Self {
        if self.is_wide() {
            let strip = if area > T::zero() && self.height > T::zero() {
                area / self.height
            } else {
                T::zero()
            };
            Self::new(
                self.x + strip,
                self.y,
                (self.width - strip).max(T::zero()),
                self.height,
            )
        } else {
            let strip = if area > T::zero() && self.width > T::zero() {
                area / self.width
            } else {
                T::zero()
            };
            Self::new(
                self.x,
                self.y + strip,
                self.width,
                (self.height - strip).max(T::zero()),
            )
        }
    }

    /// Total free area
    pub fn area(&self) -> T {
        self.width * self.height
    }

    /// The free region as a rectangle
    pub fn bounds(&self) -> Rectangle<T> {
        Rectangle::from_origin_size(self.x, self.y, self.width, self.height)
    }
}
