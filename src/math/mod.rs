//! Numeric helpers for the layout

/// Scaling weights onto an area
pub mod normalize;
/// Worst aspect ratio of a candidate row
pub mod ratio;
