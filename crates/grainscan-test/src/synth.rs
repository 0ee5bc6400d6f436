//! Synthetic test inputs
//!
//! Tests never read fixture files; every image is built here.

use crate::error::{TestError, TestResult};
use grainscan_core::{LabelMap, Pix, PixMut};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn grid_size(rows: &[&str]) -> TestResult<(u32, u32)> {
    let width = rows.first().map_or(0, |r| r.chars().count());
    for (row, r) in rows.iter().enumerate() {
        if r.chars().count() != width {
            return Err(TestError::Pattern {
                row,
                message: format!("expected {width} columns, got {}", r.chars().count()),
            });
        }
    }
    Ok((width as u32, rows.len() as u32))
}

/// Build a single-channel mask from an ASCII picture.
///
/// `#` is foreground (255), `.` is background (0).
///
/// ```
/// use grainscan_test::mask_from_ascii;
///
/// let mask = mask_from_ascii(&["#.", ".#"]).unwrap();
/// assert_eq!(mask.data(), &[255, 0, 0, 255]);
/// ```
pub fn mask_from_ascii(rows: &[&str]) -> TestResult<Pix> {
    let (w, h) = grid_size(rows)?;
    let mut data = Vec::with_capacity(w as usize * h as usize);
    for (row, r) in rows.iter().enumerate() {
        for ch in r.chars() {
            data.push(match ch {
                '#' => 255,
                '.' => 0,
                other => {
                    return Err(TestError::Pattern {
                        row,
                        message: format!("unexpected character {other:?}"),
                    });
                }
            });
        }
    }
    Ok(Pix::from_vec(w, h, 1, data)?)
}

/// Build a label map from an ASCII picture of digits.
///
/// `.` is background, `1`-`9` are labels.
pub fn labels_from_ascii(rows: &[&str]) -> TestResult<LabelMap> {
    let (w, h) = grid_size(rows)?;
    let mut data = Vec::with_capacity(w as usize * h as usize);
    for (row, r) in rows.iter().enumerate() {
        for ch in r.chars() {
            let label = match ch {
                '.' => 0,
                d => d.to_digit(10).ok_or_else(|| TestError::Pattern {
                    row,
                    message: format!("unexpected character {d:?}"),
                })?,
            };
            data.push(label);
        }
    }
    Ok(LabelMap::from_vec(w, h, data)?)
}

/// Build a single-channel image from rows of samples.
pub fn gray_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> TestResult<Pix> {
    let w = rows.first().map_or(0, |r| r.as_ref().len());
    if let Some(row) = rows.iter().position(|r| r.as_ref().len() != w) {
        return Err(TestError::Pattern {
            row,
            message: format!("expected {w} samples"),
        });
    }
    let data = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
    Ok(Pix::from_vec(w as u32, rows.len() as u32, 1, data)?)
}

/// Fill the rectangle `[x, x + w) x [y, y + h)` with `value` in every
/// channel, clipped to the image.
pub fn fill_rect(pix: &mut PixMut, x: u32, y: u32, w: u32, h: u32, value: u8) {
    let x_end = x.saturating_add(w).min(pix.width());
    let y_end = y.saturating_add(h).min(pix.height());
    for yy in y..y_end {
        for xx in x..x_end {
            for c in 0..pix.channels() {
                pix.set_sample_unchecked(xx, yy, c, value);
            }
        }
    }
}

/// Random single-channel mask where each pixel is foreground with
/// probability `density` (clamped to `[0, 1]`).
pub fn random_mask(width: u32, height: u32, density: f64, seed: u64) -> TestResult<Pix> {
    let p = density.clamp(0.0, 1.0);
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width as usize * height as usize)
        .map(|_| if rng.random_bool(p) { 255 } else { 0 })
        .collect();
    Ok(Pix::from_vec(width, height, 1, data)?)
}

/// A grain rectangle for [`grain_scene`]: `(x, y, width, height)`.
pub type Grain = (u32, u32, u32, u32);

/// Dark RGB background with bright axis-aligned grains.
///
/// Background is `(20, 20, 20)`; grains are `(230, 220, 200)`.
pub fn grain_scene(width: u32, height: u32, grains: &[Grain]) -> TestResult<Pix> {
    let mut pm = PixMut::new(width, height, 3)?;
    pm.fill(20);
    for &(x, y, w, h) in grains {
        let x_end = x.saturating_add(w).min(width);
        let y_end = y.saturating_add(h).min(height);
        for yy in y..y_end {
            for xx in x..x_end {
                pm.set_pixel(xx, yy, &[230, 220, 200])?;
            }
        }
    }
    Ok(pm.into())
}
