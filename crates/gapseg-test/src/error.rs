//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// A pattern row contains a character with no sample mapping
    #[error("invalid pattern character '{ch}' at row {row}, column {col}")]
    InvalidPattern { row: usize, col: usize, ch: char },

    /// The pattern does not describe a valid raster
    #[error("invalid raster: {0}")]
    Raster(#[from] gapseg_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
