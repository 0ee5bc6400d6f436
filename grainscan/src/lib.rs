//! grainscan - Count grains in images
//!
//! Grains (rice, seeds, pills) on a contrasting background are counted by
//! finding their outlines with a Sobel edge detector, thresholding the
//! gradient magnitude, labeling the 4-connected outline rings and keeping
//! the rings whose area lies in an expected range.
//!
//! # Overview
//!
//! - [`filter`] - border sampling, convolution, gradient magnitude, threshold
//! - [`region`] - connected-component labeling, area filter, statistics
//! - [`io`] - PNG / JPEG decoding and encoding
//! - [`count_grains`] - the whole pipeline with [`GrainCountOptions`]
//! - [`colorize_labels`] / [`draw_overlay`] - visualisation
//!
//! # Example
//!
//! ```
//! use grainscan::{GrainCountOptions, Pix, PixMut, count_grains};
//!
//! // one bright 40x20 grain on a dark background
//! let mut pm = PixMut::new(80, 60, 1).unwrap();
//! for y in 20..40 {
//!     for x in 20..60 {
//!         pm.set_sample(x, y, 0, 200).unwrap();
//!     }
//! }
//! let pix: Pix = pm.into();
//!
//! let opts = GrainCountOptions::new().with_area_range(50, 1000);
//! let result = count_grains(&pix, &opts).unwrap();
//! assert_eq!(result.count, 1);
//! ```

mod error;
mod pipeline;
mod render;

// Re-export core types (primary data structures used everywhere)
pub use grainscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use grainscan_filter as filter;
pub use grainscan_io as io;
pub use grainscan_region as region;

pub use error::{GrainError, GrainResult};
pub use pipeline::{GrainCount, GrainCountOptions, count_grains, count_grains_in_file};
pub use render::{BOX_COLOR, MARKER_COLOR, colorize_labels, draw_overlay, label_color};
