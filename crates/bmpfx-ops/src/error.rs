//! Error types for filter selection.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Grid length does not match the declared dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// No filter with this flag or name.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
