//! Bounding boxes
//!
//! Unlike a width/height rectangle, [`BoundingBox`] stores inclusive
//! min/max corners, which is what a raster scan over a label map
//! naturally produces.

/// Axis-aligned box with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Left x coordinate (inclusive)
    pub x_min: u32,
    /// Top y coordinate (inclusive)
    pub y_min: u32,
    /// Right x coordinate (inclusive)
    pub x_max: u32,
    /// Bottom y coordinate (inclusive)
    pub y_max: u32,
}

impl BoundingBox {
    /// Create a box from inclusive corners, ordering them if needed.
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self {
            x_min: x1.min(x2),
            y_min: y1.min(y2),
            x_max: x1.max(x2),
            y_max: y1.max(y2),
        }
    }

    /// A box covering the single pixel `(x, y)`.
    #[inline]
    pub const fn from_point(x: u32, y: u32) -> Self {
        Self {
            x_min: x,
            y_min: y,
            x_max: x,
            y_max: y,
        }
    }

    /// Grow the box to include `(x, y)`.
    #[inline]
    pub fn extend(&mut self, x: u32, y: u32) {
        self.x_min = self.x_min.min(x);
        self.y_min = self.y_min.min(y);
        self.x_max = self.x_max.max(x);
        self.y_max = self.y_max.max(y);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.x_max - self.x_min + 1
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y_max - self.y_min + 1
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Integer center, rounding toward the min corner.
    #[inline]
    pub fn center(&self) -> (u32, u32) {
        (
            self.x_min + (self.x_max - self.x_min) / 2,
            self.y_min + (self.y_max - self.y_min) / 2,
        )
    }

    /// Check if a point is inside the box.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
