//! Error types for edgepad-core
//!
//! Recoverable failures of buffer allocation and border operations are
//! reported through [`Error`]. Precondition violations inside the pixel
//! copy primitive are not errors: they indicate a bug in the caller's
//! coordinate arithmetic and panic instead.

use thiserror::Error;

/// edgepad-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid channel count
    #[error("invalid channel count: {0}")]
    InvalidChannels(u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Byte buffer does not match the declared geometry
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Empty input where pixel data is required
    #[error("null or empty input: {0}")]
    NullInput(&'static str),

    /// Memory allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,
}

/// Result type alias for edgepad-core operations
pub type Result<T> = std::result::Result<T, Error>;
