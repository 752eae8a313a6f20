/// Command-line interface
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering
pub mod image;
/// Item file parsing and item/rectangle pairing
pub mod items;
/// Intensity to colour mapping
pub mod palette;
/// Batch progress display
pub mod progress;
/// Text reports
pub mod report;
