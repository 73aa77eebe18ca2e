//! Error types for quadmosaic-io

use thiserror::Error;

/// Errors that can occur while reading or writing images
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadmosaic_core::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// The image could not be encoded
    #[error("encode error: {0}")]
    Encode(String),

    /// The format cannot be determined or is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
