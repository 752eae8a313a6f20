//! Aspect-ratio statistics and partition checks for finished layouts

use crate::geometry::rectangle::Rectangle;

/// Summary of how square and how complete a layout is
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutQuality {
    /// Number of rectangles measured
    pub count: usize,
    /// Sum of all rectangle areas
    pub total_area: f64,
    /// Mean aspect ratio over rectangles with a positive area
    pub mean_aspect_ratio: f64,
    /// Largest aspect ratio over rectangles with a positive area
    pub worst_aspect_ratio: f64,
    /// Rectangles with zero area or non-finite coordinates
    pub degenerate: usize,
}

/// A violation of the tiling guarantees of a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartitionIssue {
    /// Rectangle has NaN or infinite coordinates
    NonFinite {
        /// Rectangle index
        index: usize,
    },
    /// Rectangle extends past the layout bounds
    OutOfBounds {
        /// Rectangle index
        index: usize,
    },
    /// Two rectangles share interior area
    Overlap {
        /// Lower rectangle index
        first: usize,
        /// Higher rectangle index
        second: usize,
        /// Shared area
        area: f64,
    },
}

/// Long side over short side, always at least 1
///
/// Zero-thickness rectangles have an infinite ratio.
pub fn aspect_ratio(rect: &Rectangle) -> f64 {
    let width = rect.width();
    let height = rect.height();
    let long = width.max(height);
    let short = width.min(height);
    if short <= 0.0 {
        f64::INFINITY
    } else {
        long / short
    }
}

/// Measure a layout
pub fn measure(rects: &[Rectangle]) -> LayoutQuality {
    let mut total_area = 0.0;
    let mut ratio_sum = 0.0;
    let mut worst = 0.0_f64;
    let mut measured = 0_usize;
    let mut degenerate = 0_usize;

    for rect in rects {
        if !rect.is_finite() || rect.area() <= 0.0 {
            degenerate += 1;
            continue;
        }
        let ratio = aspect_ratio(rect);
        total_area += rect.area();
        ratio_sum += ratio;
        worst = worst.max(ratio);
        measured += 1;
    }

    let mean_aspect_ratio = if measured == 0 {
        0.0
    } else {
        ratio_sum / measured as f64
    };

    LayoutQuality {
        count: rects.len(),
        total_area,
        mean_aspect_ratio,
        worst_aspect_ratio: worst,
        degenerate,
    }
}

/// Check that a layout stays inside `bounds` and that no two rectangles overlap
///
/// Overlaps no larger than `tolerance` are ignored, as are edge excursions
/// up to `tolerance`. Non-finite rectangles are reported once and left out
/// of the overlap comparison, which is quadratic in the number of rectangles.
pub fn check_partition(
    rects: &[Rectangle],
    bounds: &Rectangle,
    tolerance: f64,
) -> Vec<PartitionIssue> {
    let mut issues = Vec::new();

    for (index, rect) in rects.iter().enumerate() {
        if !rect.is_finite() {
            issues.push(PartitionIssue::NonFinite { index });
        } else if !bounds.contains(rect, tolerance) {
            issues.push(PartitionIssue::OutOfBounds { index });
        }
    }

    for (first, a) in rects.iter().enumerate().filter(|(_, rect)| rect.is_finite()) {
        for (offset, b) in rects.iter().skip(first + 1).enumerate() {
            if !b.is_finite() {
                continue;
            }
            let area = a.overlap_area(b);
            if area > tolerance {
                issues.push(PartitionIssue::Overlap {
                    first,
                    second: first + 1 + offset,
                    area,
                });
            }
        }
    }

    issues
}
