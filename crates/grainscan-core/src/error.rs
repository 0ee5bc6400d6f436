//! Error types for grainscan-core
//!
//! Provides a unified error type for buffer construction and access.
//! Every constructor validates its shape up front, so a malformed buffer
//! is rejected before any pixel loop runs.

use thiserror::Error;

/// grainscan-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Zero width or height
    #[error("empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Channel count outside the supported range
    #[error("invalid channel count: {0} (expected 1..=4)")]
    InvalidChannels(u32),

    /// Raw data length does not match the declared shape
    #[error("buffer size mismatch: expected {expected} samples, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Coordinate outside the image
    #[error("coordinate out of bounds: ({x}, {y}) in {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
