//! Gradient magnitude and Sobel edge detection
//!
//! Two orthogonal convolution outputs `Gx`, `Gy` are combined into
//! `M = floor(sqrt(Gx^2 + Gy^2))`. The canonical [`MagnitudeMode::Clamp`]
//! saturates at 255 so that a fixed threshold means the same thing on
//! every image; [`MagnitudeMode::Rescale`] stretches against the image's
//! own maximum instead.

use crate::border::BorderPolicy;
use crate::convolve::convolve_named;
use crate::kernel::KernelId;
use crate::rows::fill_rows;
use crate::{FilterError, FilterResult};
use grainscan_core::{Pix, PixMut};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// How gradient magnitudes are mapped into `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MagnitudeMode {
    /// `min(255, floor(m))`
    #[default]
    Clamp,
    /// `floor(m * 255 / max(m))`; an all-zero gradient stays zero
    Rescale,
}

/// Edge orientation selected by [`sobel_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeOrientation {
    /// Response of the horizontal-edge Sobel kernel only
    Horizontal,
    /// Response of the vertical-edge Sobel kernel only
    Vertical,
    /// Gradient magnitude of both responses
    #[default]
    All,
}

/// Combine two single-channel gradient images with [`MagnitudeMode::Clamp`].
pub fn magnitude(gx: &Pix, gy: &Pix) -> FilterResult<Pix> {
    magnitude_with_mode(gx, gy, MagnitudeMode::Clamp)
}

/// Combine two single-channel gradient images.
///
/// # Errors
///
/// [`FilterError::UnsupportedChannels`] unless both inputs have one
/// channel, [`FilterError::DimensionMismatch`] if their sizes differ.
pub fn magnitude_with_mode(gx: &Pix, gy: &Pix, mode: MagnitudeMode) -> FilterResult<Pix> {
    check_single_channel(gx)?;
    check_single_channel(gy)?;
    if !gx.sizes_equal(gy) {
        return Err(FilterError::DimensionMismatch {
            expected: (gx.width(), gx.height()),
            actual: (gy.width(), gy.height()),
        });
    }

    let mut out = PixMut::new(gx.width(), gx.height(), 1)?;
    let stride = out.stride();
    match mode {
        MagnitudeMode::Clamp => {
            fill_rows(out.data_mut(), stride, |y, row| {
                let y = y as u32;
                for ((dst, &a), &b) in row.iter_mut().zip(gx.row(y)).zip(gy.row(y)) {
                    *dst = hypot(a, b).min(255.0) as u8;
                }
            });
        }
        MagnitudeMode::Rescale => {
            let max = gx
                .data()
                .iter()
                .zip(gy.data())
                .map(|(&a, &b)| hypot(a, b))
                .fold(0.0f64, f64::max);
            if max > 0.0 {
                let scale = 255.0 / max;
                fill_rows(out.data_mut(), stride, |y, row| {
                    let y = y as u32;
                    for ((dst, &a), &b) in row.iter_mut().zip(gx.row(y)).zip(gy.row(y)) {
                        *dst = (hypot(a, b) * scale).min(255.0) as u8;
                    }
                });
            }
        }
    }
    Ok(out.into())
}

/// Sobel edge detection on a single-channel image.
///
/// Each directional response is a clamped convolution output, so only
/// positive gradients survive into the magnitude.
///
/// # Arguments
/// * `pix` - Input single-channel image
/// * `orientation` - Which response to return
/// * `policy` - Border handling for both convolutions
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pix), fields(w = pix.width(), h = pix.height()))
)]
pub fn sobel_edge(
    pix: &Pix,
    orientation: EdgeOrientation,
    policy: BorderPolicy,
) -> FilterResult<Pix> {
    check_single_channel(pix)?;
    match orientation {
        EdgeOrientation::Horizontal => convolve_named(pix, KernelId::SobelHorizontal, policy),
        EdgeOrientation::Vertical => convolve_named(pix, KernelId::SobelVertical, policy),
        EdgeOrientation::All => {
            let gx = convolve_named(pix, KernelId::SobelHorizontal, policy)?;
            let gy = convolve_named(pix, KernelId::SobelVertical, policy)?;
            magnitude(&gx, &gy)
        }
    }
}

#[inline]
fn hypot(a: u8, b: u8) -> f64 {
    let (a, b) = (f64::from(a), f64::from(b));
    (a * a + b * b).sqrt()
}

pub(crate) fn check_single_channel(pix: &Pix) -> FilterResult<()> {
    if pix.channels() != 1 {
        return Err(FilterError::UnsupportedChannels {
            expected: "1 (grayscale)",
            actual: pix.channels(),
        });
    }
    Ok(())
}
