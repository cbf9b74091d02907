//! I/O error types
//!
//! Each codec maps its underlying library errors into `IoError` variants so
//! that callers only need to handle one error type.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The path does not name an existing file
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Standard I/O error (permission denied, disk full, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes match no known signature (format detection only)
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The bytes could not be decoded into a non-empty image
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
