//! Error types for catalog, codec, and filesystem operations

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::TILE_SIZE;

/// Main error type for all codec operations
#[derive(Debug)]
pub enum CodecError {
    /// Catalog resource missing for a requested tile index
    TileNotFound {
        /// Nibble value the tile stands for
        index: u8,
        /// Path where the tile file was expected
        path: PathBuf,
    },

    /// Catalog tile dimensions differ from the fixed tile size
    MalformedTile {
        /// Nibble value the tile stands for
        index: u8,
        /// Actual width in pixels
        width: u32,
        /// Actual height in pixels
        height: u32,
    },

    /// Two catalog tiles are pixel-identical
    ///
    /// A duplicate makes deciphering ambiguous: a cell matching both
    /// tiles has no single nibble value.
    DuplicateTile {
        /// Lower of the two colliding indices
        first: u8,
        /// Higher of the two colliding indices
        second: u8,
    },

    /// A catalog tile is fully transparent
    ///
    /// Full transparency is reserved as the trailing-cell padding
    /// sentinel, so no tile may consist of it.
    BlankTile {
        /// Nibble value the tile stands for
        index: u8,
    },

    /// Input image dimensions do not form a square grid of whole cells
    MalformedImage {
        /// Image width in pixels
        width: u32,
        /// Image height in pixels
        height: u32,
    },

    /// A deciphered cell's pixels match no catalog tile
    UnrecognizedTile {
        /// Grid cell index in layout order
        cell: u32,
        /// Grid side in cells
        side: u32,
    },

    /// Odd number of nibbles cannot recombine into whole bytes
    TruncatedSequence {
        /// Number of nibbles recovered
        nibbles: usize,
    },

    /// Recombined bytes are not valid UTF-8
    InvalidEncoding {
        /// Underlying UTF-8 conversion error
        source: std::string::FromUtf8Error,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an image to the filesystem
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileNotFound { index, path } => {
                write!(f, "Tile image not found for index {index}: {}", path.display())
            }
            Self::MalformedTile {
                index,
                width,
                height,
            } => {
                write!(
                    f,
                    "Tile {index} is {width}x{height}, expected {TILE_SIZE}x{TILE_SIZE}"
                )
            }
            Self::DuplicateTile { first, second } => {
                write!(f, "Tiles {first} and {second} are pixel-identical")
            }
            Self::BlankTile { index } => {
                write!(f, "Tile {index} is fully transparent")
            }
            Self::MalformedImage { width, height } => {
                write!(
                    f,
                    "Image is {width}x{height}, expected a square multiple of the tile size"
                )
            }
            Self::UnrecognizedTile { cell, side } => {
                write!(f, "Cell {cell} (grid {side}x{side}) matches no catalog tile")
            }
            Self::TruncatedSequence { nibbles } => {
                write!(f, "Odd nibble count {nibbles} cannot recombine into bytes")
            }
            Self::InvalidEncoding { source } => {
                write!(f, "Deciphered bytes are not valid UTF-8: {source}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidEncoding { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for codec results
pub type Result<T> = std::result::Result<T, CodecError>;

impl From<image::ImageError> for CodecError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for CodecError {
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
) -> CodecError {
    CodecError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cell_position() {
        let err = CodecError::UnrecognizedTile { cell: 5, side: 3 };
        let message = err.to_string();
        assert!(message.contains("Cell 5"));
        assert!(message.contains("3x3"));
    }

    #[test]
    fn test_utf8_error_exposes_source() {
        let utf8_err = String::from_utf8(vec![0xFF]).unwrap_err();
        let err = CodecError::InvalidEncoding { source: utf8_err };
        assert!(std::error::Error::source(&err).is_some());
    }
}
