//! grainscan core - Basic data structures for object extraction
//!
//! This crate provides the fundamental data structures shared by the
//! filtering and region crates:
//!
//! - [`Pix`] / [`PixMut`] - Interleaved 8-bit pixel buffer (immutable / mutable)
//! - [`LabelMap`] - Per-pixel component labels
//! - [`BoundingBox`] - Inclusive pixel rectangle
//!
//! Every constructor validates its shape, so zero-sized buffers are
//! rejected with [`Error::EmptyImage`] before any processing happens.

pub mod bbox;
pub mod error;
pub mod labelmap;
pub mod pix;

pub use bbox::BoundingBox;
pub use error::{Error, Result};
pub use labelmap::LabelMap;
pub use pix::{MAX_CHANNELS, Pix, PixMut, Pixel};
