//! Error types for rasterkit-core
//!
//! Every fallible operation in the core crate returns [`Result`]. The
//! variants carry enough context to explain the failure without exposing
//! buffer internals.

use thiserror::Error;

/// rasterkit core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions (zero width or height, or overflow)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A color could not be built from its textual parts
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// Pixel access outside the raster
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Two buffers that must agree in size do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A flat buffer does not hold `width * height` pixels
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested region or block does not fit the image
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
