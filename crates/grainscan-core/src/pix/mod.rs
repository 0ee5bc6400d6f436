//! PIX - The pixel buffer
//!
//! `Pix` is a dense, row-major grid of `width x height` pixels with
//! `channels` interleaved 8-bit samples per pixel (1 = grayscale,
//! 3 = RGB, 4 = RGBA).
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership) and is never
//! modified in place by the processing stages. To build or edit pixel
//! data, use [`PixMut`] (created directly, or via [`Pix::try_into_mut`] /
//! [`Pix::to_mut`]) and convert back with `Into<Pix>`.

pub mod convert;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Largest supported number of samples per pixel.
pub const MAX_CHANNELS: u32 = 4;

/// A single pixel. Samples past the image's channel count are zero.
pub type Pixel = [u8; MAX_CHANNELS as usize];

/// Validate a shape and return the number of samples it holds.
fn sample_count(width: u32, height: u32, channels: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    if channels == 0 || channels > MAX_CHANNELS {
        return Err(Error::InvalidChannels(channels));
    }
    Ok(width as usize * height as usize * channels as usize)
}

/// Internal PIX data
#[derive(Debug, Clone, PartialEq, Eq)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: u32,
    /// Interleaved samples, row-major
    data: Vec<u8>,
}

impl PixData {
    #[inline]
    fn index(&self, x: u32, y: u32, c: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize + c as usize
    }

    #[inline]
    fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    #[inline]
    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

/// PIX - Immutable pixel buffer
///
/// # Examples
///
/// ```
/// use grainscan_core::Pix;
///
/// let pix = Pix::new(640, 480, 3).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.channels(), 3);
/// assert_eq!(pix.get_sample(10, 10, 2), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a zero-filled buffer.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyImage`] if either dimension is zero,
    /// [`Error::InvalidChannels`] if `channels` is not in `1..=4`.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        Ok(PixMut::new(width, height, channels)?.into())
    }

    /// Wrap existing interleaved row-major samples.
    ///
    /// # Errors
    ///
    /// As [`Pix::new`], plus [`Error::BufferSize`] if `data.len()` is not
    /// `width * height * channels`.
    pub fn from_vec(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        let expected = sample_count(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                channels,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.channels
    }

    /// Number of samples in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.inner.stride();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Get one sample, or `None` outside the image or channel range.
    #[inline]
    pub fn get_sample(&self, x: u32, y: u32, c: u32) -> Option<u8> {
        if !self.inner.contains(x, y) || c >= self.inner.channels {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y, c)])
    }

    /// Get one sample without the `Option` wrapper.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the sample array.
    #[inline]
    pub fn get_sample_unchecked(&self, x: u32, y: u32, c: u32) -> u8 {
        self.inner.data[self.inner.index(x, y, c)]
    }

    /// Get all samples of one pixel.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if !self.inner.contains(x, y) {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get all samples of one pixel, panicking outside the image.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Pixel {
        let mut px = [0u8; MAX_CHANNELS as usize];
        let start = self.inner.index(x, y, 0);
        let n = self.inner.channels as usize;
        px[..n].copy_from_slice(&self.inner.data[start..start + n]);
        px
    }

    /// Check whether two images have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Check whether two images have the same width, height and channel count.
    pub fn same_shape(&self, other: &Pix) -> bool {
        self.sizes_equal(other) && self.channels() == other.channels()
    }

    /// Count pixels with at least one nonzero sample.
    pub fn count_nonzero(&self) -> usize {
        self.inner
            .data
            .chunks_exact(self.inner.channels as usize)
            .filter(|px| px.iter().any(|&s| s != 0))
            .count()
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Create a zero-filled mutable buffer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Pix::new`].
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        let len = sample_count(width, height, channels)?;
        Ok(PixMut {
            inner: PixData {
                width,
                height,
                channels,
                data: vec![0u8; len],
            },
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.channels
    }

    /// Number of samples in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable raw access to the samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get one sample, or `None` outside the image or channel range.
    #[inline]
    pub fn get_sample(&self, x: u32, y: u32, c: u32) -> Option<u8> {
        if !self.inner.contains(x, y) || c >= self.inner.channels {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y, c)])
    }

    /// Set one sample.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] outside the image, [`Error::InvalidParameter`]
    /// for a channel index past the channel count.
    pub fn set_sample(&mut self, x: u32, y: u32, c: u32, val: u8) -> Result<()> {
        if !self.inner.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        if c >= self.inner.channels {
            return Err(Error::InvalidParameter(format!(
                "channel {} out of range for {}-channel image",
                c, self.inner.channels
            )));
        }
        self.set_sample_unchecked(x, y, c, val);
        Ok(())
    }

    /// Set one sample, panicking outside the sample array.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, c: u32, val: u8) {
        let idx = self.inner.index(x, y, c);
        self.inner.data[idx] = val;
    }

    /// Set the leading samples of one pixel from `px`.
    ///
    /// Extra entries in `px` beyond the channel count are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: &[u8]) -> Result<()> {
        if !self.inner.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        let n = px.len().min(self.inner.channels as usize);
        let start = self.inner.index(x, y, 0);
        self.inner.data[start..start + n].copy_from_slice(&px[..n]);
        Ok(())
    }

    /// Set every sample to `val`.
    pub fn fill(&mut self, val: u8) {
        self.inner.data.fill(val);
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.inner.width,
            height: self.inner.height,
        }
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
