//! Error types for the test framework

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load an image
    #[error("failed to load image '{}': {message}", .path.display())]
    ImageLoad { path: PathBuf, message: String },

    /// Failed to write an image
    #[error("failed to write image '{}': {message}", .path.display())]
    ImageWrite { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
