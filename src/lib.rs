//! Squarified treemap layout
//!
//! Splits a rectangle into one sub-rectangle per weight, with areas
//! proportional to the weights and aspect ratios kept close to square.
//! Rectangles come back in the same order as the weights.
//!
//! ```
//! use squarify::algorithm::layout::compute_layout;
//!
//! let rects = compute_layout::<f64>(&[1.0, 1.0, 1.0, 1.0], 10.0, 10.0, 0.0, 0.0);
//! assert_eq!(rects.len(), 4);
//! assert!(rects.iter().all(|r| (r.area() - 25.0).abs() < 1e-9));
//! ```

#![forbid(unsafe_code)]

/// Squarify engine and the layout entry points built on it
pub mod algorithm;
/// Quality measurements for finished layouts
pub mod analysis;
/// Rectangles and the shrinking container used during layout
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Weight normalization and row aspect-ratio scoring
pub mod math;

pub use algorithm::layout::{compute_layout, try_compute_layout};
pub use geometry::rectangle::Rectangle;
pub use io::error::{Result, TreemapError};
