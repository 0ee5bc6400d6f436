//! grainscan-region - Connected components for grainscan
//!
//! This crate turns a binary mask into counted, measured components:
//!
//! - **Labeling** - two-pass 4-connected labeling over a disjoint-set forest
//! - **Area filtering** - keep components within an inclusive area range
//! - **Statistics** - area, bounding box and centroid per label
//!
//! Output labels are always dense: `1..=count` with no gaps.
//!
//! # Examples
//!
//! ```
//! use grainscan_core::Pix;
//! use grainscan_region::{component_bounds, filter_by_area, label_components};
//!
//! #[rustfmt::skip]
//! let mask = Pix::from_vec(5, 2, 1, vec![
//!     255, 255, 0, 255, 0,
//!     255, 255, 0,   0, 0,
//! ]).unwrap();
//!
//! let (labels, count) = label_components(&mask).unwrap();
//! assert_eq!(count, 2);
//!
//! let (big, count) = filter_by_area(&labels, 2, 100).unwrap();
//! assert_eq!(count, 1);
//! assert_eq!(component_bounds(&big)[&1].area, 4);
//! ```

pub mod error;
pub mod label;
pub mod select;
pub mod stats;
mod union_find;

pub use error::{RegionError, RegionResult};
pub use label::{count_components, label_components};
pub use select::{component_areas, filter_by_area, foreground_mask};
pub use stats::{ComponentStats, component_bounds};
