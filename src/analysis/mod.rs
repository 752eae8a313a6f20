/// Aspect ratios, coverage and partition checks
pub mod quality;
