//! Connected-component labeling
//!
//! Two-pass raster labeling with 4-connectivity. The first pass assigns
//! provisional labels from the already visited up and left neighbours and
//! records equivalences in a [`DisjointSet`]. The second pass resolves
//! each provisional label to its root and numbers roots densely in the
//! order they are first met.

use crate::error::{RegionError, RegionResult};
use crate::union_find::DisjointSet;
use grainscan_core::{LabelMap, Pix};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Label the 4-connected foreground components of a single-channel mask.
///
/// Any nonzero sample is foreground.
///
/// # Returns
///
/// The label map and the number of components. Labels are exactly
/// `1..=count`, numbered in raster order of each component's first pixel.
///
/// # Examples
///
/// ```
/// use grainscan_core::Pix;
/// use grainscan_region::label_components;
///
/// let mask = Pix::from_vec(3, 2, 1, vec![255, 0, 255, 255, 0, 0]).unwrap();
/// let (labels, count) = label_components(&mask).unwrap();
/// assert_eq!(count, 2);
/// assert_eq!(labels.data(), &[1, 0, 2, 1, 0, 0]);
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(mask), fields(w = mask.width(), h = mask.height()))
)]
pub fn label_components(mask: &Pix) -> RegionResult<(LabelMap, u32)> {
    if mask.channels() != 1 {
        return Err(RegionError::UnsupportedChannels {
            expected: "1 (mask)",
            actual: mask.channels(),
        });
    }

    let w = mask.width() as usize;
    let mut labels = LabelMap::new(mask.width(), mask.height())?;
    let mut sets = DisjointSet::new();
    let data = labels.data_mut();

    // Pass 1: provisional labels
    for (i, &v) in mask.data().iter().enumerate() {
        if v == 0 {
            continue;
        }
        let up = if i >= w { data[i - w] } else { 0 };
        let left = if i % w > 0 { data[i - 1] } else { 0 };
        data[i] = match (up, left) {
            (0, 0) => sets.make_set(),
            (n, 0) | (0, n) => n,
            (u, l) => {
                if u != l {
                    sets.union(u, l);
                }
                u.min(l)
            }
        };
    }

    // Pass 2: dense relabeling by first discovery
    let mut final_label = vec![0u32; sets.len() + 1];
    let mut count = 0u32;
    for label in data.iter_mut().filter(|l| **l != 0) {
        let root = sets.find(*label) as usize;
        if final_label[root] == 0 {
            count += 1;
            final_label[root] = count;
        }
        *label = final_label[root];
    }

    Ok((labels, count))
}

/// Number of 4-connected foreground components in a mask.
pub fn count_components(mask: &Pix) -> RegionResult<u32> {
    label_components(mask).map(|(_, count)| count)
}
