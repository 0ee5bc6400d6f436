//! 4-neighbour rank filters
//!
//! Each output sample is computed from the in-bounds up, down, left and
//! right neighbours of the input sample in the same channel. The centre
//! itself never contributes to the neighbour set. Pixels without any
//! in-bounds neighbour (only possible in a 1x1 image) are copied.

use crate::FilterResult;
use crate::rows::fill_rows;
use grainscan_core::{Pix, PixMut};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Rule applied to the neighbour set of each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighborFilter {
    /// Clamp the centre into `[min, max]` of its neighbours
    Bound,
    /// Raise a centre below the neighbour minimum to that minimum
    RaiseToMin,
    /// Lower a centre above the neighbour maximum to that maximum
    LowerToMax,
    /// Floor of the neighbour mean
    Mean,
    /// Upper median of the neighbours (`sorted[len / 2]`)
    Median,
}

impl NeighborFilter {
    fn apply(self, center: u8, nbrs: &mut [u8]) -> u8 {
        if nbrs.is_empty() {
            return center;
        }
        let min = nbrs.iter().copied().min().unwrap_or(center);
        let max = nbrs.iter().copied().max().unwrap_or(center);
        match self {
            NeighborFilter::Bound => center.clamp(min, max),
            NeighborFilter::RaiseToMin => center.max(min),
            NeighborFilter::LowerToMax => center.min(max),
            NeighborFilter::Mean => {
                let sum: u32 = nbrs.iter().map(|&v| u32::from(v)).sum();
                (sum / nbrs.len() as u32) as u8
            }
            NeighborFilter::Median => {
                nbrs.sort_unstable();
                nbrs[nbrs.len() / 2]
            }
        }
    }
}

/// Apply a 4-neighbour filter to every channel of `pix`.
///
/// ```
/// use grainscan_core::Pix;
/// use grainscan_filter::{NeighborFilter, neighbor_filter};
///
/// // isolated bright speck is pulled down to its neighbours
/// let pix = Pix::from_vec(3, 1, 1, vec![10, 250, 20]).unwrap();
/// let out = neighbor_filter(&pix, NeighborFilter::Bound).unwrap();
/// assert_eq!(out.data(), &[250, 20, 250]);
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(pix), fields(w = pix.width(), h = pix.height()))
)]
pub fn neighbor_filter(pix: &Pix, filter: NeighborFilter) -> FilterResult<Pix> {
    let w = pix.width();
    let h = pix.height();
    let nc = pix.channels();
    let mut out = PixMut::new(w, h, nc)?;
    let stride = out.stride();

    fill_rows(out.data_mut(), stride, |y, row| {
        let y = y as u32;
        let mut nbrs = [0u8; 4];
        for x in 0..w {
            for c in 0..nc {
                let mut n = 0;
                for (dx, dy) in [(1i64, 0i64), (-1, 0), (0, 1), (0, -1)] {
                    let nx = i64::from(x) + dx;
                    let ny = i64::from(y) + dy;
                    if (0..i64::from(w)).contains(&nx) && (0..i64::from(h)).contains(&ny) {
                        nbrs[n] = pix.get_sample_unchecked(nx as u32, ny as u32, c);
                        n += 1;
                    }
                }
                let center = pix.get_sample_unchecked(x, y, c);
                row[(x * nc + c) as usize] = filter.apply(center, &mut nbrs[..n]);
            }
        }
    });

    Ok(out.into())
}
