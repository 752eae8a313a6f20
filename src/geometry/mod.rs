//! Geometric primitives of the layout
//!
//! This module contains:
//! - The rectangle type returned to callers
//! - The container that shrinks as rows are committed

/// Remaining free region during a layout pass
pub mod container;
/// Axis-aligned rectangle type
pub mod rectangle;

pub use container::Container;
pub use rectangle::Rectangle;
