//! Error types for bmpfx-core operations.
//!
//! The transforms themselves never fail; errors only arise when a buffer is
//! built or addressed with dimensions that do not match its allocation.
//!
//! # Usage
//!
//! ```rust
//! use bmpfx_core::{Error, Result};
//!
//! fn check(row: usize, col: usize, width: usize, height: usize) -> Result<()> {
//!     if row >= height || col >= width {
//!         return Err(Error::out_of_bounds(row, col, width, height));
//!     }
//!     Ok(())
//! }
//! assert!(check(3, 0, 2, 2).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or addressing an [`Image`](crate::Image).
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    #[error("pixel (row {row}, col {col}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// Row that was accessed
        row: usize,
        /// Column that was accessed
        col: usize,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },

    /// Width and height cannot describe a buffer (e.g. `width * height` overflows).
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Buffer length does not equal `width * height`.
    #[error("buffer holds {got} pixels, {width}x{height} needs {expected}")]
    DimensionMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Pixel count the dimensions require
        expected: usize,
        /// Pixel count actually supplied
        got: usize,
    },

    /// The pixel buffer could not be allocated.
    #[error("failed to allocate {requested} pixels: {reason}")]
    AllocationFailed {
        /// Pixels requested
        requested: usize,
        /// Failure reason
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self::OutOfBounds {
            row,
            col,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(width: usize, height: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            width,
            height,
            expected: width.saturating_mul(height),
            got,
        }
    }

    /// Creates an [`Error::AllocationFailed`] error.
    #[inline]
    pub fn allocation_failed(requested: usize, reason: impl Into<String>) -> Self {
        Self::AllocationFailed {
            requested,
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error means the image could not be held in memory.
    #[inline]
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Self::AllocationFailed { .. } | Self::InvalidDimensions { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let msg = Error::out_of_bounds(7, 9, 4, 5).to_string();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("col 9"));
        assert!(msg.contains("4x5"));
    }

    #[test]
    fn test_dimension_mismatch_reports_expected() {
        let err = Error::dimension_mismatch(3, 2, 5);
        match err {
            Error::DimensionMismatch { expected, got, .. } => {
                assert_eq!(expected, 6);
                assert_eq!(got, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resource_errors() {
        assert!(Error::allocation_failed(1 << 40, "out of memory").is_resource_error());
        assert!(Error::invalid_dimensions(usize::MAX, 2, "overflow").is_resource_error());
        assert!(!Error::out_of_bounds(0, 0, 0, 0).is_resource_error());
    }
}
