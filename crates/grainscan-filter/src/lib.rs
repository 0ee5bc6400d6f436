//! grainscan-filter - Pixel stages of the grain-count pipeline
//!
//! This crate provides:
//!
//! - Border sampling with zero, replicate, reflect and wrap padding
//! - Convolution with arbitrary odd square kernels and a built-in kernel table
//! - Gradient magnitude and Sobel edge detection
//! - Binary thresholding
//! - 4-neighbour rank filters (bound, min, max, mean, median)
//! - Seeded speckle noise for synthetic inputs
//!
//! Every stage takes a [`Pix`](grainscan_core::Pix) by reference and returns
//! a new one. With the `rayon` feature output rows are computed in
//! parallel.

pub mod border;
pub mod convolve;
pub mod edge;
mod error;
pub mod kernel;
pub mod neighbor;
pub mod noise;
mod rows;
pub mod threshold;

pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, KernelId};

pub use border::{BorderPolicy, sample};
pub use convolve::{convolve, convolve_named};
pub use edge::{EdgeOrientation, MagnitudeMode, magnitude, magnitude_with_mode, sobel_edge};
pub use neighbor::{NeighborFilter, neighbor_filter};
pub use noise::add_speckles;
pub use threshold::{FOREGROUND, threshold};
