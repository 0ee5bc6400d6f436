//! Channel conversions
//!
//! - [`Pix::to_gray`] - luminosity grayscale
//! - [`Pix::to_rgb`] - replicate a gray channel into RGB

use super::{Pix, PixMut};
use crate::error::Result;

/// Luminosity weights for R, G, B.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

impl Pix {
    /// Convert to a single-channel luminosity image.
    ///
    /// `gray = trunc(0.299 R + 0.587 G + 0.114 B)`. Alpha is ignored.
    /// A single-channel image is returned as a shared clone; a two-channel
    /// (gray + alpha) image keeps its first channel.
    pub fn to_gray(&self) -> Result<Pix> {
        let nc = self.channels() as usize;
        if nc == 1 {
            return Ok(self.clone());
        }

        let mut out = PixMut::new(self.width(), self.height(), 1)?;
        for (dst, px) in out.data_mut().iter_mut().zip(self.data().chunks_exact(nc)) {
            *dst = if nc == 2 {
                px[0]
            } else {
                (LUMA_R * px[0] as f64 + LUMA_G * px[1] as f64 + LUMA_B * px[2] as f64) as u8
            };
        }
        Ok(out.into())
    }

    /// Convert to a three-channel RGB image.
    ///
    /// Gray samples are replicated into R, G and B; RGBA drops alpha;
    /// an RGB image is returned as a shared clone.
    pub fn to_rgb(&self) -> Result<Pix> {
        let nc = self.channels() as usize;
        if nc == 3 {
            return Ok(self.clone());
        }

        let mut out = PixMut::new(self.width(), self.height(), 3)?;
        for (dst, px) in out
            .data_mut()
            .chunks_exact_mut(3)
            .zip(self.data().chunks_exact(nc))
        {
            if nc >= 3 {
                dst.copy_from_slice(&px[..3]);
            } else {
                dst.fill(px[0]);
            }
        }
        Ok(out.into())
    }
}
