//! Grid snapping for shape resize operations.
//!
//! Runs before a resize command executes and rewrites the proposed bounds so
//! that width and height grow onto the grid. Which position is corrected
//! depends on the edges listed in the resize hint.

use crate::geometry::Bounds;
use crate::shapes::ShapeId;
use crate::snap::{GridSnapping, SnapConstraint};
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

bitflags! {
    /// Edges being moved by a resize.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        const NORTH = 0b0001;
        const SOUTH = 0b0010;
        const EAST  = 0b0100;
        const WEST  = 0b1000;
    }
}

impl Directions {
    /// Whether a vertical edge (east or west) is moving.
    pub fn has_horizontal(self) -> bool {
        self.intersects(Self::EAST | Self::WEST)
    }

    /// Whether a horizontal edge (north or south) is moving.
    pub fn has_vertical(self) -> bool {
        self.intersects(Self::NORTH | Self::SOUTH)
    }
}

/// Unknown character in a direction string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid resize direction '{0}', expected any of n, s, e, w")]
pub struct DirectionParseError(pub char);

impl FromStr for Directions {
    type Err = DirectionParseError;

    /// Parse compact strings such as `"nw"` or `"se"`, in any order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().try_fold(Self::empty(), |directions, c| {
            let flag = match c.to_ascii_lowercase() {
                'n' => Self::NORTH,
                's' => Self::SOUTH,
                'e' => Self::EAST,
                'w' => Self::WEST,
                other => return Err(DirectionParseError(other)),
            };
            Ok(directions | flag)
        })
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, c) in [
            (Self::NORTH, 'n'),
            (Self::SOUTH, 's'),
            (Self::EAST, 'e'),
            (Self::WEST, 'w'),
        ] {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// How a resize asks to be snapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoResize {
    /// Grow to the grid around the original center.
    Simple,
    /// Snap only the listed edges.
    Directional(Directions),
}

/// Hints attached to a resize command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeHints {
    pub auto_resize: Option<AutoResize>,
}

/// A pending resize of a single shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeContext {
    pub shape: ShapeId,
    /// Bounds before the resize.
    pub old_bounds: Bounds,
    /// Proposed bounds, rewritten in place by interceptors.
    pub new_bounds: Bounds,
    pub hints: ResizeHints,
}

impl ResizeContext {
    /// Create a context with no hints.
    pub fn new(shape: ShapeId, old_bounds: Bounds, new_bounds: Bounds) -> Self {
        Self {
            shape,
            old_bounds,
            new_bounds,
            hints: ResizeHints::default(),
        }
    }

    /// Attach an auto-resize hint.
    pub fn with_auto_resize(mut self, auto_resize: AutoResize) -> Self {
        self.hints.auto_resize = Some(auto_resize);
        self
    }
}

/// Hook run before a command executes, registered by the host dispatcher.
pub trait CommandInterceptor {
    fn pre_execute(&self, context: &mut ResizeContext);
}

/// Snaps resized bounds to the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeBehavior {
    snapping: GridSnapping,
}

impl ResizeBehavior {
    pub fn new(snapping: GridSnapping) -> Self {
        Self { snapping }
    }

    /// Grow width and height to the grid and recenter on the old center.
    pub fn snap_simple(&self, old: Bounds, new_bounds: &mut Bounds) {
        new_bounds.width = self
            .snapping
            .snap_value(new_bounds.width, SnapConstraint::min(new_bounds.width));
        new_bounds.height = self
            .snapping
            .snap_value(new_bounds.height, SnapConstraint::min(new_bounds.height));

        new_bounds.x = old.x + old.width / 2.0 - new_bounds.width / 2.0;
        new_bounds.y = old.y + old.height / 2.0 - new_bounds.height / 2.0;
    }

    /// Snap only the axes whose edges are listed in `directions`.
    pub fn snap_directional(&self, new_bounds: &mut Bounds, directions: Directions) {
        if directions.has_horizontal() {
            self.snap_horizontally(new_bounds, directions);
        }
        if directions.has_vertical() {
            self.snap_vertically(new_bounds, directions);
        }
    }

    /// Snap x and width.
    ///
    /// `e` alone shifts x so that x + width is kept, `w` alone only grows
    /// the width, `we` moves x down onto the grid.
    pub fn snap_horizontally(&self, new_bounds: &mut Bounds, directions: Directions) {
        let (x, width) = self.snap_axis(
            new_bounds.x,
            new_bounds.width,
            directions.contains(Directions::EAST),
            directions.contains(Directions::WEST),
        );
        new_bounds.x = x;
        new_bounds.width = width;
    }

    /// Snap y and height.
    ///
    /// `n` alone shifts y so that y + height is kept, `s` alone only grows
    /// the height, `ns` moves y down onto the grid.
    pub fn snap_vertically(&self, new_bounds: &mut Bounds, directions: Directions) {
        let (y, height) = self.snap_axis(
            new_bounds.y,
            new_bounds.height,
            directions.contains(Directions::NORTH),
            directions.contains(Directions::SOUTH),
        );
        new_bounds.y = y;
        new_bounds.height = height;
    }

    /// Snap one axis. `shifting` is the edge whose lone drag moves the
    /// position (east or north), `other` the opposite edge.
    /// Returns the new position and length.
    fn snap_axis(&self, position: f64, length: f64, shifting: bool, other: bool) -> (f64, f64) {
        let snapped_length = self.snapping.snap_value(length, SnapConstraint::min(length));

        match (shifting, other) {
            // Both edges move: push the position back onto the grid and let
            // the length absorb the difference.
            (true, true) => {
                let snapped_position = self
                    .snapping
                    .snap_value(position, SnapConstraint::max(position));
                let delta = position - snapped_position;
                let extra = self.snapping.snap_value(delta, SnapConstraint::min(delta));
                (snapped_position, snapped_length + extra)
            }
            (true, false) => (position + length - snapped_length, snapped_length),
            _ => (position, snapped_length),
        }
    }
}

impl CommandInterceptor for ResizeBehavior {
    fn pre_execute(&self, context: &mut ResizeContext) {
        let Some(auto_resize) = context.hints.auto_resize else {
            return;
        };
        debug_assert!(
            context.new_bounds.is_well_formed(),
            "resize of {} proposes negative size",
            context.shape
        );

        let proposed = context.new_bounds;
        match auto_resize {
            AutoResize::Simple => self.snap_simple(context.old_bounds, &mut context.new_bounds),
            AutoResize::Directional(directions) => {
                self.snap_directional(&mut context.new_bounds, directions)
            }
        }
        log::debug!(
            "Snapped resize of {} ({:?}): {:?} -> {:?}",
            context.shape,
            auto_resize,
            proposed,
            context.new_bounds
        );
    }
}
