//! Error types for layout validation, input parsing and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all treemap operations
#[derive(Debug)]
pub enum TreemapError {
    /// A layout or rendering parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A weight is negative or not finite
    InvalidWeight {
        /// Position of the weight in the input sequence
        index: usize,
        /// The offending value
        value: f64,
    },

    /// The layout produced a rectangle with NaN or infinite coordinates
    ///
    /// Only reachable when intermediate values overflow, for regions whose
    /// area exceeds the range of the float type.
    NonFiniteLayout {
        /// Index of the first non-finite rectangle
        index: usize,
    },

    /// An item file could not be parsed
    Parse {
        /// File being parsed
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Failed to save the rendered treemap
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TreemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidWeight { index, value } => {
                write!(
                    f,
                    "Invalid weight {value} at index {index}: weights must be finite and non-negative"
                )
            }
            Self::NonFiniteLayout { index } => {
                write!(f, "Layout produced non-finite geometry at index {index}")
            }
            Self::Parse { path, line, reason } => {
                write!(f, "Failed to parse '{}' line {line}: {reason}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TreemapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for treemap results
pub type Result<T> = std::result::Result<T, TreemapError>;

impl From<image::ImageError> for TreemapError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TreemapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TreemapError {
    TreemapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a parse error for a line of an item file
pub fn parse_error(path: impl Into<PathBuf>, line: usize, reason: &impl ToString) -> TreemapError {
    TreemapError::Parse {
        path: path.into(),
        line,
        reason: reason.to_string(),
    }
}
