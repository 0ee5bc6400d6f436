//! Grain-count pipeline
//!
//! gray → optional blur → Sobel magnitude → threshold → label → area filter
//!
//! Grains are found through their outlines: the binary edge mask of a
//! grain forms one connected ring, and rings whose pixel count falls in
//! the configured area range are counted.

use crate::error::GrainResult;
use grainscan_core::{LabelMap, Pix};
use grainscan_filter::{
    BorderPolicy, KernelId, MagnitudeMode, convolve_named, magnitude_with_mode, threshold,
};
use grainscan_region::{
    ComponentStats, RegionError, component_bounds, filter_by_area, label_components,
};
use std::collections::BTreeMap;
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::{debug, debug_span, instrument};

/// Options for [`count_grains`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrainCountOptions {
    /// Edge magnitudes strictly above this value are foreground
    pub threshold: i32,
    /// Smallest component area kept (inclusive)
    pub min_area: u64,
    /// Largest component area kept (inclusive)
    pub max_area: u64,
    /// Border handling for every convolution
    pub border: BorderPolicy,
    /// Kernel applied to the grayscale image before edge detection
    pub pre_blur: Option<KernelId>,
    /// How gradient magnitudes are mapped into `[0, 255]`
    pub magnitude: MagnitudeMode,
}

impl Default for GrainCountOptions {
    fn default() -> Self {
        Self {
            threshold: 25,
            min_area: 800,
            max_area: 9000,
            border: BorderPolicy::Replicate,
            pre_blur: None,
            magnitude: MagnitudeMode::Clamp,
        }
    }
}

impl GrainCountOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the edge threshold
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the inclusive component area range
    pub fn with_area_range(mut self, min_area: u64, max_area: u64) -> Self {
        self.min_area = min_area;
        self.max_area = max_area;
        self
    }

    /// Set the border policy
    pub fn with_border(mut self, border: BorderPolicy) -> Self {
        self.border = border;
        self
    }

    /// Blur with `kernel` before edge detection
    pub fn with_pre_blur(mut self, kernel: KernelId) -> Self {
        self.pre_blur = Some(kernel);
        self
    }

    /// Set the magnitude mode
    pub fn with_magnitude(mut self, mode: MagnitudeMode) -> Self {
        self.magnitude = mode;
        self
    }
}

/// Result of [`count_grains`]
#[derive(Debug, Clone)]
pub struct GrainCount {
    /// Components that passed the area filter
    pub count: u32,
    /// Components before the area filter
    pub raw_count: u32,
    /// Filtered labels, `1..=count`
    pub labels: LabelMap,
    /// Statistics of every surviving label
    pub components: BTreeMap<u32, ComponentStats>,
    /// Gradient magnitude image
    pub edges: Pix,
    /// Thresholded edge mask
    pub binary: Pix,
}

/// Count grains in an image.
///
/// Color inputs are converted to gray first. Fails before any pixel work
/// if the area range is inverted.
///
/// # Examples
///
/// ```
/// use grainscan::{GrainCountOptions, Pix, count_grains};
///
/// let pix = Pix::new(32, 32, 3).unwrap();
/// let result = count_grains(&pix, &GrainCountOptions::default()).unwrap();
/// assert_eq!(result.count, 0);
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(pix, opts), fields(w = pix.width(), h = pix.height()))
)]
pub fn count_grains(pix: &Pix, opts: &GrainCountOptions) -> GrainResult<GrainCount> {
    if opts.min_area > opts.max_area {
        return Err(RegionError::InvalidRange {
            min: opts.min_area,
            max: opts.max_area,
        }
        .into());
    }

    #[cfg(feature = "tracing")]
    let edge_span = debug_span!("edges").entered();
    let gray = pix.to_gray()?;
    let smoothed = match opts.pre_blur {
        Some(kernel) => convolve_named(&gray, kernel, opts.border)?,
        None => gray,
    };
    let gx = convolve_named(&smoothed, KernelId::SobelHorizontal, opts.border)?;
    let gy = convolve_named(&smoothed, KernelId::SobelVertical, opts.border)?;
    let edges = magnitude_with_mode(&gx, &gy, opts.magnitude)?;
    let binary = threshold(&edges, opts.threshold)?;
    #[cfg(feature = "tracing")]
    drop(edge_span);

    let (raw, raw_count) = label_components(&binary)?;
    #[cfg(feature = "tracing")]
    debug!(raw_count, "components labeled");

    let (labels, count) = filter_by_area(&raw, opts.min_area, opts.max_area)?;
    #[cfg(feature = "tracing")]
    debug!(count, min = opts.min_area, max = opts.max_area, "area filter applied");

    let components = component_bounds(&labels);
    Ok(GrainCount {
        count,
        raw_count,
        labels,
        components,
        edges,
        binary,
    })
}

/// Read an image file and count its grains.
///
/// A missing or undecodable file is reported as [`GrainError::Io`](crate::GrainError::Io).
pub fn count_grains_in_file<P: AsRef<Path>>(
    path: P,
    opts: &GrainCountOptions,
) -> GrainResult<GrainCount> {
    let pix = grainscan_io::read_image(path)?;
    count_grains(&pix, opts)
}
