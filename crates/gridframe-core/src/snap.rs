//! Grid snapping for coordinates and lengths.

use crate::config::{GRID_SIZE, InteractionConfig};
use crate::geometry::Bounds;
use kurbo::Point;

/// Optional bounds on the result of a snap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapConstraint {
    /// Result must be the smallest grid value at or above this.
    pub min: Option<f64>,
    /// Result must be the largest grid value at or below this.
    pub max: Option<f64>,
}

impl SnapConstraint {
    /// Plain nearest-grid snap.
    pub const NONE: Self = Self { min: None, max: None };

    /// Never snap below `min`.
    pub fn min(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    /// Never snap above `max`.
    pub fn max(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }
}

#[derive(Debug, Clone, Copy)]
enum Rounding {
    Nearest,
    Up,
    Down,
}

/// Quantize `value` to a multiple of `quantum`.
///
/// `Nearest` rounds halves toward positive infinity, so `5` on a grid of `10`
/// becomes `10` and `-5` becomes `0`.
fn quantize(value: f64, quantum: f64, rounding: Rounding) -> f64 {
    let steps = value / quantum;
    match rounding {
        Rounding::Nearest => (steps + 0.5).floor() * quantum,
        // The division can lose the fractional step, so check the product too
        Rounding::Up => {
            let snapped = steps.ceil() * quantum;
            if snapped < value { snapped + quantum } else { snapped }
        }
        Rounding::Down => {
            let snapped = steps.floor() * quantum;
            if snapped > value { snapped - quantum } else { snapped }
        }
    }
}

/// Snaps values to a fixed grid unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnapping {
    grid_size: f64,
}

impl Default for GridSnapping {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}

impl GridSnapping {
    /// Create a snapping service for the given grid unit.
    pub fn new(grid_size: f64) -> Self {
        debug_assert!(
            grid_size.is_finite() && grid_size > 0.0,
            "grid size must be positive, got {grid_size}"
        );
        Self { grid_size }
    }

    /// Create a snapping service from validated configuration.
    pub fn from_config(config: &InteractionConfig) -> Self {
        Self::new(config.grid_size)
    }

    /// The configured grid unit.
    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Snap a value to the nearest grid multiple, honoring `constraint`.
    ///
    /// `min` wins over `max` when both are given and no grid value satisfies
    /// both.
    pub fn snap_value(&self, value: f64, constraint: SnapConstraint) -> f64 {
        let mut value = value;

        if let (Some(min), Some(max)) = (constraint.min, constraint.max) {
            debug_assert!(min <= max, "snap constraint min {min} exceeds max {max}");
        }

        if let Some(max) = constraint.max {
            value = value.min(quantize(max, self.grid_size, Rounding::Down));
        }

        if let Some(min) = constraint.min {
            value = value.max(quantize(min, self.grid_size, Rounding::Up));
        }

        quantize(value, self.grid_size, Rounding::Nearest)
    }

    /// Snap a point to the nearest grid intersection.
    pub fn snap_point(&self, point: Point) -> Point {
        Point::new(
            self.snap_value(point.x, SnapConstraint::NONE),
            self.snap_value(point.y, SnapConstraint::NONE),
        )
    }

    /// Snap the top-left corner and size of `bounds` to the grid.
    pub fn snap_bounds(&self, bounds: Bounds) -> Bounds {
        let origin = self.snap_point(Point::new(bounds.x, bounds.y));
        Bounds::new(
            origin.x,
            origin.y,
            self.snap_value(bounds.width, SnapConstraint::NONE),
            self.snap_value(bounds.height, SnapConstraint::NONE),
        )
    }
}
