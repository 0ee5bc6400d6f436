//! Convolution kernels
//!
//! A [`Kernel`] is an immutable square matrix of odd side. The common
//! 3x3 kernels live in a static table addressed by [`KernelId`], so no
//! name lookup happens at run time.

use crate::{FilterError, FilterResult};

/// Identifier of a built-in 3x3 kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelId {
    /// Box average (sum 9)
    Mean,
    /// 1-2-1 Gaussian approximation (sum 16)
    Gaussian,
    /// 4-neighbour Laplacian (sum 0)
    Laplacian4,
    /// 8-neighbour Laplacian (sum 0)
    Laplacian8,
    /// Sobel, responds to horizontal edges (sum 0)
    SobelHorizontal,
    /// Sobel, responds to vertical edges (sum 0)
    SobelVertical,
    /// Outline / ridge detector (sum 0)
    Outline,
    /// Sharpen (sum 1)
    Sharpen,
    /// Emboss (sum 1)
    Emboss,
    /// Diagonal motion blur (sum 3)
    MotionBlur,
}

type Table = [[i32; 3]; 3];

const MEAN: Table = [[1, 1, 1], [1, 1, 1], [1, 1, 1]];
const GAUSSIAN: Table = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];
const LAPLACIAN_4: Table = [[0, 1, 0], [1, -4, 1], [0, 1, 0]];
const LAPLACIAN_8: Table = [[1, 1, 1], [1, -8, 1], [1, 1, 1]];
const SOBEL_HORIZONTAL: Table = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];
const SOBEL_VERTICAL: Table = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const OUTLINE: Table = [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]];
const SHARPEN: Table = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];
const EMBOSS: Table = [[-2, -1, 0], [-1, 1, 1], [0, 1, 2]];
const MOTION_BLUR: Table = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

impl KernelId {
    /// Every built-in kernel.
    pub const ALL: [KernelId; 10] = [
        KernelId::Mean,
        KernelId::Gaussian,
        KernelId::Laplacian4,
        KernelId::Laplacian8,
        KernelId::SobelHorizontal,
        KernelId::SobelVertical,
        KernelId::Outline,
        KernelId::Sharpen,
        KernelId::Emboss,
        KernelId::MotionBlur,
    ];

    /// Weights of this kernel, row-major.
    pub const fn weights(self) -> &'static Table {
        match self {
            KernelId::Mean => &MEAN,
            KernelId::Gaussian => &GAUSSIAN,
            KernelId::Laplacian4 => &LAPLACIAN_4,
            KernelId::Laplacian8 => &LAPLACIAN_8,
            KernelId::SobelHorizontal => &SOBEL_HORIZONTAL,
            KernelId::SobelVertical => &SOBEL_VERTICAL,
            KernelId::Outline => &OUTLINE,
            KernelId::Sharpen => &SHARPEN,
            KernelId::Emboss => &EMBOSS,
            KernelId::MotionBlur => &MOTION_BLUR,
        }
    }

    /// Short lowercase name, for reports.
    pub const fn name(self) -> &'static str {
        match self {
            KernelId::Mean => "mean",
            KernelId::Gaussian => "gaussian",
            KernelId::Laplacian4 => "laplacian4",
            KernelId::Laplacian8 => "laplacian8",
            KernelId::SobelHorizontal => "sobel_h",
            KernelId::SobelVertical => "sobel_v",
            KernelId::Outline => "outline",
            KernelId::Sharpen => "sharpen",
            KernelId::Emboss => "emboss",
            KernelId::MotionBlur => "motion_blur",
        }
    }
}

/// A square convolution kernel of odd side `2 * offset + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length
    size: u32,
    /// Weights, row-major
    data: Vec<f64>,
    /// Sum of all weights
    sum: f64,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidKernelShape`] unless `width == height`, the side
    /// is odd, and `data.len() == width * height`;
    /// [`FilterError::InvalidParameters`] for a NaN or infinite weight.
    pub fn new(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        if width != height || width % 2 == 0 || data.len() != width as usize * height as usize {
            return Err(FilterError::InvalidKernelShape { width, height });
        }
        if let Some(bad) = data.iter().find(|v| !v.is_finite()) {
            return Err(FilterError::InvalidParameters(format!(
                "kernel weight {bad} is not finite"
            )));
        }
        Ok(Self::from_parts(width, data.to_vec()))
    }

    /// Create a kernel from a list of rows.
    ///
    /// ```
    /// use grainscan_filter::Kernel;
    ///
    /// let k = Kernel::from_rows(&[[0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [0.0, 1.0, 0.0]]).unwrap();
    /// assert_eq!(k.size(), 3);
    /// assert_eq!(k.sum(), 5.0);
    /// assert!(Kernel::from_rows(&[[1.0, 2.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> FilterResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        if rows.iter().any(|r| r.as_ref().len() as u32 != width) {
            return Err(FilterError::InvalidKernelShape { width, height });
        }
        let data: Vec<f64> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(width, height, &data)
    }

    /// Build one of the built-in kernels.
    pub fn named(id: KernelId) -> Self {
        let data = id
            .weights()
            .iter()
            .flat_map(|row| row.iter().map(|&v| f64::from(v)))
            .collect();
        Self::from_parts(3, data)
    }

    fn from_parts(size: u32, data: Vec<f64>) -> Self {
        let sum = data.iter().sum();
        Self { size, data, sum }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the center to an edge (`(size - 1) / 2`).
    #[inline]
    pub fn offset(&self) -> u32 {
        self.size / 2
    }

    /// Weights, row-major.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Weight at column `col`, row `row`.
    #[inline]
    pub fn get(&self, col: u32, row: u32) -> Option<f64> {
        if col >= self.size || row >= self.size {
            return None;
        }
        Some(self.data[(row * self.size + col) as usize])
    }

    /// Sum of all weights.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Divisor applied to each accumulated sum: the kernel sum when it is
    /// positive, otherwise none.
    #[inline]
    pub fn divisor(&self) -> Option<f64> {
        (self.sum > 0.0).then_some(self.sum)
    }
}

impl From<KernelId> for Kernel {
    fn from(id: KernelId) -> Self {
        Kernel::named(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_validation() {
        assert!(Kernel::new(3, 3, &[0.0; 9]).is_ok());
        assert!(Kernel::new(1, 1, &[2.0]).is_ok());
        assert_eq!(
            Kernel::new(2, 2, &[0.0; 4]).unwrap_err(),
            FilterError::InvalidKernelShape {
                width: 2,
                height: 2
            }
        );
        assert!(Kernel::new(3, 5, &[0.0; 15]).is_err());
        assert!(Kernel::new(3, 3, &[0.0; 8]).is_err());
        assert!(Kernel::new(0, 0, &[]).is_err());
    }

    #[test]
    fn test_ragged_rows() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 1.0, 1.0], vec![1.0, 1.0], vec![1.0, 1.0, 1.0]];
        assert!(Kernel::from_rows(&rows).is_err());
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(Kernel::from_rows(&empty).is_err());
    }

    #[test]
    fn test_named_sums() {
        assert_eq!(Kernel::named(KernelId::Mean).sum(), 9.0);
        assert_eq!(Kernel::named(KernelId::Gaussian).sum(), 16.0);
        assert_eq!(Kernel::named(KernelId::MotionBlur).sum(), 3.0);
        assert_eq!(Kernel::named(KernelId::Sharpen).sum(), 1.0);
        assert_eq!(Kernel::named(KernelId::Emboss).sum(), 1.0);
        for id in [
            KernelId::SobelHorizontal,
            KernelId::SobelVertical,
            KernelId::Laplacian4,
            KernelId::Laplacian8,
            KernelId::Outline,
        ] {
            assert_eq!(Kernel::named(id).sum(), 0.0, "{}", id.name());
            assert_eq!(Kernel::named(id).divisor(), None);
        }
    }

    #[test]
    fn test_layout() {
        let k = Kernel::from(KernelId::SobelHorizontal);
        assert_eq!(k.offset(), 1);
        assert_eq!(k.get(1, 0), Some(-2.0));
        assert_eq!(k.get(1, 2), Some(2.0));
        assert_eq!(k.get(3, 0), None);
    }
}
