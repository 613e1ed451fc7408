//! Error types for loading, compositing, and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all stitching operations
#[derive(Debug)]
pub enum StitchError {
    /// Failed to decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Content sniffing failed to match a supported raster format
    ///
    /// Raised only for explicitly listed files; during a directory scan the
    /// offending entry is skipped instead.
    UnsupportedFormat {
        /// Path to the unrecognized file
        path: PathBuf,
    },

    /// Compositing was invoked with no loaded images
    EmptyRegistry,

    /// A source image exceeds the cell dimensions set by the first image
    SizeMismatch {
        /// Path of the offending image
        path: PathBuf,
        /// Offending image dimensions
        dimensions: (u32, u32),
        /// Cell dimensions taken from the first image
        cell_dimensions: (u32, u32),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or write the output spritesheet
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

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::UnsupportedFormat { path } => {
                write!(
                    f,
                    "'{}' is not a supported image format",
                    path.display()
                )
            }
            Self::EmptyRegistry => {
                write!(f, "No images loaded")
            }
            Self::SizeMismatch {
                path,
                dimensions,
                cell_dimensions,
            } => {
                write!(
                    f,
                    "Images are not the same size: '{}' is {}x{} but the first image set the cell to {}x{}",
                    path.display(),
                    dimensions.0,
                    dimensions.1,
                    cell_dimensions.0,
                    cell_dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stitching results
pub type Result<T> = std::result::Result<T, StitchError>;

impl From<image::ImageError> for StitchError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for StitchError {
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
) -> StitchError {
    StitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to a bare I/O error
pub fn file_system(path: PathBuf, operation: &'static str, source: std::io::Error) -> StitchError {
    StitchError::FileSystem {
        path,
        operation,
        source,
    }
}
