//! Border sampling
//!
//! Resolves pixel requests that fall outside the image according to a
//! padding policy. Every function here is total over all integer
//! coordinates; nothing in this module can fail.

use grainscan_core::{MAX_CHANNELS, Pix, Pixel};

/// Padding policy for samples outside `[0, W) x [0, H)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderPolicy {
    /// Outside samples are the zero pixel
    Zero,
    /// Clamp to the nearest edge pixel
    #[default]
    Replicate,
    /// Mirror about the edge pixel (`-x`, `2W - x - 2`), then clamp
    Reflect,
    /// Cyclic (`x mod W`)
    Wrap,
}

impl BorderPolicy {
    /// Map a coordinate onto `0..len`.
    ///
    /// In-range coordinates are returned unchanged under every policy.
    /// `None` means "use the zero sample" and is only produced by
    /// [`BorderPolicy::Zero`].
    ///
    /// # Panics
    ///
    /// Debug-asserts that `len > 0`; buffers can never be empty.
    pub fn resolve(self, pos: i64, len: u32) -> Option<u32> {
        debug_assert!(len > 0);
        let n = i64::from(len);
        if (0..n).contains(&pos) {
            return Some(pos as u32);
        }
        let resolved = match self {
            BorderPolicy::Zero => return None,
            BorderPolicy::Replicate => pos.clamp(0, n - 1),
            BorderPolicy::Reflect => {
                let mirrored = if pos < 0 {
                    pos.saturating_neg()
                } else {
                    (2 * n).saturating_sub(pos).saturating_sub(2)
                };
                // far-out coordinates reflect past the opposite edge
                mirrored.clamp(0, n - 1)
            }
            BorderPolicy::Wrap => pos.rem_euclid(n),
        };
        Some(resolved as u32)
    }
}

/// Read the pixel at `(x, y)`, resolving out-of-bounds coordinates with
/// `policy`.
///
/// Samples past the image's channel count are zero.
///
/// # Examples
///
/// ```
/// use grainscan_core::Pix;
/// use grainscan_filter::{BorderPolicy, sample};
///
/// let pix = Pix::from_vec(3, 1, 1, vec![10, 20, 30]).unwrap();
/// assert_eq!(sample(&pix, -1, 0, BorderPolicy::Zero)[0], 0);
/// assert_eq!(sample(&pix, -1, 0, BorderPolicy::Replicate)[0], 10);
/// assert_eq!(sample(&pix, -1, 0, BorderPolicy::Reflect)[0], 20);
/// assert_eq!(sample(&pix, -1, 0, BorderPolicy::Wrap)[0], 30);
/// ```
pub fn sample(pix: &Pix, x: i64, y: i64, policy: BorderPolicy) -> Pixel {
    match (
        policy.resolve(x, pix.width()),
        policy.resolve(y, pix.height()),
    ) {
        (Some(rx), Some(ry)) => pix.get_pixel_unchecked(rx, ry),
        _ => [0; MAX_CHANNELS as usize],
    }
}
