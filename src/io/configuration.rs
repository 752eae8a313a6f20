//! Layout, rendering and runtime configuration defaults

// Canvas defaults for the command-line tool
/// Default layout width in pixels
pub const DEFAULT_WIDTH: f64 = 800.0;
/// Default layout height in pixels
pub const DEFAULT_HEIGHT: f64 = 600.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed image dimension in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

// Geometric comparisons absorb accumulated rounding from successive cuts
/// Slack allowed when checking containment and overlap
pub const GEOMETRY_TOLERANCE: f64 = 1e-6;

// Input settings
/// Extension of item files picked up from a directory
pub const INPUT_EXTENSION: &str = "csv";
/// Marker starting a comment line in item files
pub const COMMENT_PREFIX: char = '#';

// Output settings
/// Suffix added to rendered treemap filenames
pub const OUTPUT_SUFFIX: &str = "_treemap";
/// Extension of rendered treemap files
pub const OUTPUT_EXTENSION: &str = "png";

// Rendering defaults
/// Pixels left empty between neighbouring tiles
pub const DEFAULT_TILE_GAP: u32 = 1;
/// Corner radius of rendered tiles in pixels
pub const DEFAULT_CORNER_RADIUS: u32 = 4;
/// Colour behind and between tiles
pub const BACKGROUND_COLOR: [u8; 4] = [24, 24, 28, 255];
/// Tile colour for positive intensity
pub const POSITIVE_COLOR: [u8; 3] = [46, 160, 67];
/// Tile colour for negative intensity
pub const NEGATIVE_COLOR: [u8; 3] = [218, 54, 51];
/// Tile colour for zero or unknown intensity
pub const NEUTRAL_COLOR: [u8; 3] = [110, 110, 118];
/// Opacity of the weakest non-zero intensity
pub const MIN_TILE_OPACITY: f64 = 0.35;

// Progress bar display settings
/// Number of files above which a progress bar is shown
pub const PROGRESS_FILE_THRESHOLD: usize = 1;

// Logging
/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "squarify=info";
/// Filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "squarify=debug";
