//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] grainscan_core::Error),

    /// An ASCII picture could not be parsed
    #[error("bad pattern at row {row}: {message}")]
    Pattern { row: usize, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
