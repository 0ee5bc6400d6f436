//! Convolution
//!
//! Applies an arbitrary square kernel to every pixel and channel. Border
//! samples are produced by a [`BorderPolicy`]. The raw sum is divided by
//! the kernel sum only when that sum is positive, so zero-sum edge kernels
//! keep their full response. Results are truncated, then clamped to
//! `[0, 255]`.

use crate::border::BorderPolicy;
use crate::kernel::{Kernel, KernelId};
use crate::rows::fill_rows;
use crate::FilterResult;
use grainscan_core::{Pix, PixMut};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Convolve every channel of `pix` with `kernel`.
///
/// Returns a new buffer of the same width, height and channel count;
/// `pix` is not modified. Channels are processed independently.
///
/// # Examples
///
/// ```
/// use grainscan_core::Pix;
/// use grainscan_filter::{BorderPolicy, Kernel, KernelId, convolve};
///
/// let pix = Pix::from_vec(3, 1, 1, vec![0, 90, 0]).unwrap();
/// let out = convolve(&pix, &Kernel::named(KernelId::Mean), BorderPolicy::Zero).unwrap();
/// assert_eq!(out.data(), &[10, 10, 10]);
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pix, kernel), fields(w = pix.width(), h = pix.height(), k = kernel.size()))
)]
pub fn convolve(pix: &Pix, kernel: &Kernel, policy: BorderPolicy) -> FilterResult<Pix> {
    let w = pix.width();
    let h = pix.height();
    let nc = pix.channels() as usize;
    let size = kernel.size() as usize;
    let off = i64::from(kernel.offset());
    let weights = kernel.data();
    let divisor = kernel.divisor();

    // Resolved source column for each (kernel column, output x).
    let cols: Vec<Vec<Option<u32>>> = (0..size)
        .map(|kx| {
            (0..w)
                .map(|x| policy.resolve(i64::from(x) + kx as i64 - off, w))
                .collect()
        })
        .collect();

    let mut out = PixMut::new(w, h, pix.channels())?;
    let stride = out.stride();

    fill_rows(out.data_mut(), stride, |y, row| {
        let src_rows: Vec<Option<&[u8]>> = (0..size)
            .map(|ky| {
                policy
                    .resolve(y as i64 + ky as i64 - off, h)
                    .map(|sy| pix.row(sy))
            })
            .collect();
        let mut acc = vec![0.0f64; nc];

        for (x, out_px) in row.chunks_exact_mut(nc).enumerate() {
            acc.fill(0.0);
            for (ky, src) in src_rows.iter().enumerate() {
                let Some(src) = src else { continue };
                for (kx, col) in cols.iter().enumerate() {
                    let Some(sx) = col[x] else { continue };
                    let k = weights[ky * size + kx];
                    let base = sx as usize * nc;
                    for (a, &s) in acc.iter_mut().zip(&src[base..base + nc]) {
                        *a += k * f64::from(s);
                    }
                }
            }
            for (dst, &a) in out_px.iter_mut().zip(&acc) {
                *dst = to_sample(divisor.map_or(a, |d| a / d));
            }
        }
    });

    Ok(out.into())
}

/// Convolve with one of the built-in kernels.
pub fn convolve_named(pix: &Pix, id: KernelId, policy: BorderPolicy) -> FilterResult<Pix> {
    convolve(pix, &Kernel::named(id), policy)
}

/// Truncate toward zero, then clamp into the sample range.
#[inline]
pub(crate) fn to_sample(v: f64) -> u8 {
    v.trunc().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(w: u32, h: u32, data: Vec<u8>) -> Pix {
        Pix::from_vec(w, h, 1, data).unwrap()
    }

    #[test]
    fn test_identity_kernel() {
        let pix = gray(3, 2, vec![1, 2, 3, 4, 5, 6]);
        let k = Kernel::new(3, 3, &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        for policy in [
            BorderPolicy::Zero,
            BorderPolicy::Replicate,
            BorderPolicy::Reflect,
            BorderPolicy::Wrap,
        ] {
            assert_eq!(convolve(&pix, &k, policy).unwrap(), pix);
        }
    }

    #[test]
    fn test_mean_divides_by_nine() {
        // 3x3 interior sum = 45 + 9*10 = 135 -> 15
        let pix = gray(3, 3, (1..=9).map(|v| v + 10).collect());
        let out = convolve_named(&pix, KernelId::Mean, BorderPolicy::Zero).unwrap();
        assert_eq!(out.get_sample(1, 1, 0), Some(15));
        // corner (0,0): 11 + 12 + 14 + 15 = 52, 52 / 9 = 5.78 -> 5
        assert_eq!(out.get_sample(0, 0, 0), Some(5));
    }

    #[test]
    fn test_zero_sum_not_normalized() {
        // vertical step 0 | 100: sobel_v at the step = 100 + 200 + 100
        let pix = gray(2, 3, vec![0, 100, 0, 100, 0, 100]);
        let out = convolve_named(&pix, KernelId::SobelVertical, BorderPolicy::Replicate).unwrap();
        assert_eq!(out.get_sample(0, 1, 0), Some(255));
        // negative response clamps to 0
        let flipped = gray(2, 3, vec![100, 0, 100, 0, 100, 0]);
        let out = convolve_named(&flipped, KernelId::SobelVertical, BorderPolicy::Replicate).unwrap();
        assert_eq!(out.get_sample(0, 1, 0), Some(0));
    }

    #[test]
    fn test_truncates_not_rounds() {
        // single bright pixel under the gaussian: center 200*4/16 = 50,
        // edge 200*2/16 = 25, corner 200/16 = 12.5 -> 12
        let mut data = vec![0u8; 9];
        data[4] = 200;
        let out = convolve_named(&gray(3, 3, data), KernelId::Gaussian, BorderPolicy::Zero).unwrap();
        assert_eq!(out.data(), &[12, 25, 12, 25, 50, 25, 12, 25, 12]);
    }

    #[test]
    fn test_channels_independent() {
        let pix = Pix::from_vec(2, 1, 3, vec![255, 0, 10, 255, 0, 20]).unwrap();
        let out = convolve_named(&pix, KernelId::Mean, BorderPolicy::Replicate).unwrap();
        assert_eq!(out.channels(), 3);
        // x=0 window columns: 0,0,1 -> channel 2 = (10*6 + 20*3) / 9 = 13.3
        assert_eq!(out.get_pixel(0, 0), Some([255, 0, 13, 0]));
        assert_eq!(out.get_pixel(1, 0), Some([255, 0, 16, 0]));
    }

    #[test]
    fn test_input_untouched() {
        let pix = gray(2, 2, vec![9, 9, 9, 9]);
        let before = pix.clone();
        let _ = convolve_named(&pix, KernelId::Outline, BorderPolicy::Wrap).unwrap();
        assert_eq!(pix, before);
    }

    #[test]
    fn test_wrap_and_reflect_differ() {
        let pix = gray(4, 1, vec![0, 0, 0, 90]);
        let k = Kernel::new(3, 3, &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        // out(x) = in(x - 1)
        let wrap = convolve(&pix, &k, BorderPolicy::Wrap).unwrap();
        assert_eq!(wrap.data(), &[90, 0, 0, 0]);
        let reflect = convolve(&pix, &k, BorderPolicy::Reflect).unwrap();
        assert_eq!(reflect.data(), &[0, 0, 0, 0]);
        let zero = convolve(&pix, &k, BorderPolicy::Zero).unwrap();
        assert_eq!(zero.data(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_large_kernel_on_small_image() {
        let pix = gray(2, 2, vec![10, 20, 30, 40]);
        let k = Kernel::new(5, 5, &[1.0; 25]).unwrap();
        let out = convolve(&pix, &k, BorderPolicy::Reflect).unwrap();
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 2);
    }

    #[test]
    fn test_to_sample() {
        assert_eq!(to_sample(-3.7), 0);
        assert_eq!(to_sample(12.99), 12);
        assert_eq!(to_sample(300.0), 255);
    }
}
