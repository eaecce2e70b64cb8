//! Axis-aligned bounds in logical diagram coordinates.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Top-left anchored bounding box of a shape.
///
/// Width and height are expected to be non-negative. The resize and border
/// logic mutate the fields directly, so they are public.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create new bounds.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// X coordinate of the east edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the south edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point lies inside or on the edge of these bounds.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Whether width and height satisfy the non-negative invariant.
    pub fn is_well_formed(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        // kurbo allows inverted rects; normalize so width/height stay positive
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

impl From<Bounds> for Rect {
    fn from(bounds: Bounds) -> Self {
        Rect::new(bounds.x, bounds.y, bounds.right(), bounds.bottom())
    }
}
