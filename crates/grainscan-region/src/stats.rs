//! Per-component statistics

use grainscan_core::{BoundingBox, LabelMap};
use std::collections::BTreeMap;

/// Statistics for one labeled component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentStats {
    /// Component label
    pub label: u32,
    /// Pixel count
    pub area: u64,
    /// Inclusive bounding box
    pub bounds: BoundingBox,
    /// Mean x coordinate of the component's pixels
    pub centroid_x: f64,
    /// Mean y coordinate of the component's pixels
    pub centroid_y: f64,
}

/// Area, bounding box and centroid of every nonzero label.
///
/// One raster scan over `labels`. The map is keyed by label in ascending
/// order and never contains label 0.
///
/// ```
/// use grainscan_core::LabelMap;
/// use grainscan_region::component_bounds;
///
/// let labels = LabelMap::from_vec(3, 2, vec![1, 1, 0, 0, 1, 0]).unwrap();
/// let stats = component_bounds(&labels);
/// let c = &stats[&1];
/// assert_eq!(c.area, 3);
/// assert_eq!((c.bounds.x_min, c.bounds.x_max), (0, 1));
/// assert_eq!((c.bounds.y_min, c.bounds.y_max), (0, 1));
/// assert!((c.centroid_x - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn component_bounds(labels: &LabelMap) -> BTreeMap<u32, ComponentStats> {
    // label -> (bounds, area, sum_x, sum_y)
    let mut acc: BTreeMap<u32, (BoundingBox, u64, u64, u64)> = BTreeMap::new();
    for (x, y, label) in labels.foreground() {
        let entry = acc
            .entry(label)
            .or_insert((BoundingBox::from_point(x, y), 0, 0, 0));
        entry.0.extend(x, y);
        entry.1 += 1;
        entry.2 += u64::from(x);
        entry.3 += u64::from(y);
    }

    acc.into_iter()
        .map(|(label, (bounds, area, sx, sy))| {
            let stats = ComponentStats {
                label,
                area,
                bounds,
                centroid_x: sx as f64 / area as f64,
                centroid_y: sy as f64 / area as f64,
            };
            (label, stats)
        })
        .collect()
}
