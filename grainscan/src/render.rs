//! Visualisation of labeling results

use crate::error::GrainResult;
use grainscan_core::{LabelMap, Pix, PixMut};
use grainscan_region::ComponentStats;
use std::collections::BTreeMap;

/// Bounding box outline color
pub const BOX_COLOR: [u8; 3] = [0, 255, 0];
/// Center marker color
pub const MARKER_COLOR: [u8; 3] = [255, 0, 0];
/// Half side of the square center marker
const MARKER_RADIUS: i64 = 2;

/// Pseudo-color of a label; background is black.
pub fn label_color(label: u32) -> [u8; 3] {
    if label == 0 {
        return [0, 0, 0];
    }
    let l = u64::from(label);
    [(l * 97 % 256) as u8, (l * 57 % 256) as u8, (l * 37 % 256) as u8]
}

/// Render a label map as an RGB image, one pseudo-color per label.
pub fn colorize_labels(labels: &LabelMap) -> GrainResult<Pix> {
    let mut out = PixMut::new(labels.width(), labels.height(), 3)?;
    for (dst, &l) in out.data_mut().chunks_exact_mut(3).zip(labels.data()) {
        dst.copy_from_slice(&label_color(l));
    }
    Ok(out.into())
}

/// Draw each component's bounding box and center onto an RGB copy of
/// `image`.
///
/// Boxes are 1-pixel green outlines. Centers are 5x5 red squares at the
/// integer box center, clipped to the image.
pub fn draw_overlay(image: &Pix, components: &BTreeMap<u32, ComponentStats>) -> GrainResult<Pix> {
    let mut out = image.to_rgb()?.to_mut();
    let (w, h) = (i64::from(out.width()), i64::from(out.height()));

    for c in components.values() {
        let b = &c.bounds;
        for x in b.x_min..=b.x_max {
            put(&mut out, x, b.y_min, BOX_COLOR);
            put(&mut out, x, b.y_max, BOX_COLOR);
        }
        for y in b.y_min..=b.y_max {
            put(&mut out, b.x_min, y, BOX_COLOR);
            put(&mut out, b.x_max, y, BOX_COLOR);
        }

        let (cx, cy) = b.center();
        for dy in -MARKER_RADIUS..=MARKER_RADIUS {
            for dx in -MARKER_RADIUS..=MARKER_RADIUS {
                let x = i64::from(cx) + dx;
                let y = i64::from(cy) + dy;
                if (0..w).contains(&x) && (0..h).contains(&y) {
                    put(&mut out, x as u32, y as u32, MARKER_COLOR);
                }
            }
        }
    }
    Ok(out.into())
}

fn put(pix: &mut PixMut, x: u32, y: u32, color: [u8; 3]) {
    if x < pix.width() && y < pix.height() {
        for (c, v) in color.into_iter().enumerate() {
            pix.set_sample_unchecked(x, y, c as u32, v);
        }
    }
}
