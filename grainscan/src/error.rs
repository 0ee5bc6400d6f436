//! Error type for the grain-count pipeline

use thiserror::Error;

/// Errors from any stage of the pipeline
#[derive(Debug, Error)]
pub enum GrainError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] grainscan_core::Error),

    /// Pixel stage error
    #[error("filter error: {0}")]
    Filter(#[from] grainscan_filter::FilterError),

    /// Labeling or area filter error
    #[error("region error: {0}")]
    Region(#[from] grainscan_region::RegionError),

    /// Reading or writing an image failed
    #[error("image I/O error: {0}")]
    Io(#[from] grainscan_io::IoError),
}

/// Result type for pipeline operations
pub type GrainResult<T> = Result<T, GrainError>;
