//! Error types for gapseg-region

use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Malformed or empty input grid
    #[error("invalid image: {0}")]
    InvalidImage(#[from] gapseg_core::Error),

    /// Out-of-range gap tolerance or minimum segment size
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Operation invoked before its required predecessor
    #[error("precondition failed: {0}")]
    Precondition(&'static str),
}

/// Result type for segmentation operations
pub type RegionResult<T> = Result<T, RegionError>;
