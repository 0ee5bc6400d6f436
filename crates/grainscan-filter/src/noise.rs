//! Synthetic speckle noise

use crate::FilterResult;
use grainscan_core::Pix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Set `amount` randomly chosen pixels to white in every channel.
///
/// Positions are drawn uniformly with replacement, so fewer than `amount`
/// distinct pixels may change. The same `seed` always produces the same
/// output.
pub fn add_speckles(pix: &Pix, amount: usize, seed: u64) -> FilterResult<Pix> {
    let mut out = pix.to_mut();
    let mut rng = StdRng::seed_from_u64(seed);
    let white = vec![255u8; pix.channels() as usize];
    for _ in 0..amount {
        let x = rng.random_range(0..pix.width());
        let y = rng.random_range(0..pix.height());
        out.set_pixel(x, y, &white)?;
    }
    Ok(out.into())
}
