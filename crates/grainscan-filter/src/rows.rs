//! Row-parallel output filling
//!
//! Every pixel stage in this crate writes a fresh buffer whose rows are
//! independent. With the `rayon` feature the rows are filled in parallel;
//! results are identical either way.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Call `fill(y, row)` for each `row_len`-sample row of `out`.
pub(crate) fn fill_rows<F>(out: &mut [u8], row_len: usize, fill: F)
where
    F: Fn(usize, &mut [u8]) + Sync + Send,
{
    #[cfg(feature = "rayon")]
    out.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| fill(y, row));

    #[cfg(not(feature = "rayon"))]
    out.chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| fill(y, row));
}
