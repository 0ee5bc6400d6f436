//! Error types for grainscan-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] grainscan_core::Error),

    /// Area bounds are inverted
    #[error("invalid area range: min {min} > max {max}")]
    InvalidRange { min: u64, max: u64 },

    /// Unsupported channel count for this operation
    #[error("unsupported channel count: expected {expected}, got {actual}")]
    UnsupportedChannels { expected: &'static str, actual: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
