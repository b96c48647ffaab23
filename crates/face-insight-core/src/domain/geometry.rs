//! Basic 2-D geometry in image-pixel coordinates.

use serde::{Deserialize, Serialize};

/// A point in image-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal pixel coordinate.
    pub x: f32,
    /// Vertical pixel coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

/// An axis-aligned bounding box in image-pixel coordinates.
///
/// Detector output is not range-validated upstream, so a box may arrive
/// with `right < left` or `bottom < top`; [`BoundingBox::normalized`]
/// repairs such boxes instead of surfacing an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl BoundingBox {
    /// Creates a new bounding box.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns a copy with edges swapped so that `right >= left` and
    /// `bottom >= top`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    /// Box width. Non-negative on a normalized box.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Box height. Non-negative on a normalized box.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}
