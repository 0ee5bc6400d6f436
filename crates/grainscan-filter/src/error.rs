//! Error types for grainscan-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] grainscan_core::Error),

    /// Kernel is not square with an odd side, or its data does not fill it
    #[error("invalid kernel shape: {width}x{height} (must be square with odd side)")]
    InvalidKernelShape {
        /// Kernel width (or row length)
        width: u32,
        /// Kernel height (or row count)
        height: u32,
    },

    /// Two buffers that must share a shape do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Unsupported channel count for this operation
    #[error("unsupported channel count: expected {expected}, got {actual}")]
    UnsupportedChannels {
        /// Expected channel description
        expected: &'static str,
        /// Actual channel count
        actual: u32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
