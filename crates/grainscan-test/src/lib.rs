//! grainscan-test - Regression test framework for grainscan
//!
//! [`RegParams`] records a sequence of numbered comparisons and reports
//! every failure at the end instead of stopping at the first one. The
//! `synth` helpers build all test inputs in memory.
//!
//! # Usage
//!
//! ```
//! use grainscan_test::{RegParams, mask_from_ascii};
//!
//! let mask = mask_from_ascii(&["##.", "..#"]).unwrap();
//! let mut rp = RegParams::new("usage");
//! rp.compare_values(3.0, mask.count_nonzero() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
mod synth;

pub use error::{TestError, TestResult};
pub use params::RegParams;
pub use synth::{
    Grain, fill_rect, grain_scene, gray_from_rows, labels_from_ascii, mask_from_ascii,
    random_mask,
};
