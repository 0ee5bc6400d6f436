//! Area-based component selection
//!
//! [`filter_by_area`] keeps the components whose pixel count lies in an
//! inclusive range and renumbers the survivors densely, preserving their
//! relative order.

use crate::error::{RegionError, RegionResult};
use grainscan_core::{LabelMap, Pix};
use std::collections::BTreeMap;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Pixel count of every label present in the map.
///
/// Only labels that own at least one pixel get an entry, so every area is
/// positive. Background is not counted.
pub fn component_areas(labels: &LabelMap) -> BTreeMap<u32, u64> {
    let mut areas = BTreeMap::new();
    for &l in labels.data().iter().filter(|&&l| l != 0) {
        *areas.entry(l).or_insert(0u64) += 1;
    }
    areas
}

/// Keep only components with `min_area <= area <= max_area`.
///
/// Surviving labels are renumbered `1..=count` in ascending order of their
/// original label; every other pixel becomes background. Applying the
/// filter again with the same bounds returns the same map.
///
/// # Errors
///
/// [`RegionError::InvalidRange`] if `min_area > max_area`.
///
/// # Examples
///
/// ```
/// use grainscan_core::LabelMap;
/// use grainscan_region::filter_by_area;
///
/// let labels = LabelMap::from_vec(4, 1, vec![1, 2, 2, 3]).unwrap();
/// let (kept, count) = filter_by_area(&labels, 1, 1).unwrap();
/// assert_eq!(count, 2);
/// assert_eq!(kept.data(), &[1, 0, 0, 2]);
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(labels), fields(w = labels.width(), h = labels.height()))
)]
pub fn filter_by_area(
    labels: &LabelMap,
    min_area: u64,
    max_area: u64,
) -> RegionResult<(LabelMap, u32)> {
    if min_area > max_area {
        return Err(RegionError::InvalidRange {
            min: min_area,
            max: max_area,
        });
    }

    // old label -> new label; absent keys are rejected or background
    let mut remap = BTreeMap::new();
    let mut count = 0u32;
    for (label, area) in component_areas(labels) {
        if (min_area..=max_area).contains(&area) {
            count += 1;
            remap.insert(label, count);
        }
    }

    let data = labels
        .data()
        .iter()
        .map(|l| remap.get(l).copied().unwrap_or(0))
        .collect();
    let filtered = LabelMap::from_vec(labels.width(), labels.height(), data)?;
    Ok((filtered, count))
}

/// Single-channel mask of the labeled pixels: 255 where the label is
/// nonzero, 0 elsewhere.
pub fn foreground_mask(labels: &LabelMap) -> RegionResult<Pix> {
    let data = labels
        .data()
        .iter()
        .map(|&l| if l != 0 { 255 } else { 0 })
        .collect();
    Ok(Pix::from_vec(labels.width(), labels.height(), 1, data)?)
}
