//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File is a bitmap variant this crate does not handle.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Header values are inconsistent or out of range.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// The decoded image could not be built.
    #[error(transparent)]
    Core(#[from] bmpfx_core::Error),
}

impl IoError {
    /// Returns `true` when the input is not a file this crate can decode.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat(_) | Self::InvalidFile(_) | Self::DecodeError(_)
        )
    }

    /// Returns `true` when the image does not fit in memory.
    pub fn is_resource_error(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_resource_error())
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
