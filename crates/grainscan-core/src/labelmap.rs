//! Label map - per-pixel component labels
//!
//! A dense `height x width` grid of `u32`. Label `0` is background;
//! positive labels identify components.

use crate::error::{Error, Result};

/// Dense row-major grid of component labels.
///
/// # Examples
///
/// ```
/// use grainscan_core::LabelMap;
///
/// let mut labels = LabelMap::new(4, 3).unwrap();
/// labels.set(1, 2, 7).unwrap();
/// assert_eq!(labels.get(1, 2), Some(7));
/// assert_eq!(labels.max_label(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl LabelMap {
    /// Create an all-background label map.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyImage`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Wrap existing row-major labels.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyImage`] for a zero dimension, [`Error::BufferSize`]
    /// if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw labels, row-major.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Mutable raw labels, row-major.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Labels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Get the label at `(x, y)`, or `None` outside the map.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set the label at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, label: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = label;
        Ok(())
    }

    /// Largest label present (0 for an all-background map).
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Number of foreground (nonzero) pixels.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&l| l != 0).count()
    }

    /// Iterate `(x, y, label)` over foreground pixels in raster order.
    pub fn foreground(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        let w = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l != 0)
            .map(move |(i, &l)| ((i % w) as u32, (i / w) as u32, l))
    }
}
