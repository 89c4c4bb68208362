//! Point value type shared by every scorer.
//!
//! Two coordinate spaces flow through the same type:
//! - *raw*: image-relative, each axis in `[0, 1]`, `y` grows downward
//! - *normalized*: centroid-translated and RMS-scaled, unbounded
//!
//! The type does not track which space a point lives in; callers keep raw and
//! normalized sets in separate fields (see [`crate::route::LabeledImage`]).

use serde::{Deserialize, Serialize};

/// A tapped hold position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (top of the photo is 0 in raw space).
    pub y: f64,
}

/// Ordered sequence of points; insertion order is tap order.
pub type PointSet = Vec<Point>;

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns this point shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns this point with both coordinates multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Returns true if both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
