//! Binary thresholding

use crate::FilterResult;
use crate::edge::check_single_channel;
use crate::rows::fill_rows;
use grainscan_core::{Pix, PixMut};

/// Foreground value written by [`threshold`].
pub const FOREGROUND: u8 = 255;

/// Binarize a single-channel image.
///
/// A sample becomes [`FOREGROUND`] when it is strictly greater than
/// `cutoff`, otherwise 0. Any cutoff is accepted: below 0 every pixel is
/// foreground, at 255 or above none are.
///
/// ```
/// use grainscan_core::Pix;
/// use grainscan_filter::threshold;
///
/// let pix = Pix::from_vec(3, 1, 1, vec![24, 25, 26]).unwrap();
/// assert_eq!(threshold(&pix, 25).unwrap().data(), &[0, 0, 255]);
/// ```
pub fn threshold(pix: &Pix, cutoff: i32) -> FilterResult<Pix> {
    check_single_channel(pix)?;
    let mut out = PixMut::new(pix.width(), pix.height(), 1)?;
    let stride = out.stride();
    fill_rows(out.data_mut(), stride, |y, row| {
        for (dst, &v) in row.iter_mut().zip(pix.row(y as u32)) {
            *dst = if i32::from(v) > cutoff { FOREGROUND } else { 0 };
        }
    });
    Ok(out.into())
}
