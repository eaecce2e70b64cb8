//! GridFrame Core Library
//!
//! Pointer interaction for frame shapes and grid-snapped resizing for the
//! diagram editor. Everything here runs synchronously inside a single event
//! or command callback supplied by the host.

pub mod config;
pub mod frame;
pub mod geometry;
pub mod resize;
pub mod selection;
pub mod shapes;
pub mod snap;

pub use config::{ConfigError, DEFAULT_BORDER_OFFSET, GRID_SIZE, InteractionConfig};
pub use frame::{
    FrameInteraction, InteractionEvent, InteractionHandler, InteractionKind, is_on_border,
};
pub use geometry::Bounds;
pub use resize::{
    AutoResize, CommandInterceptor, DirectionParseError, Directions, ResizeBehavior, ResizeContext,
    ResizeHints,
};
pub use selection::{Selection, SelectionState};
pub use shapes::{ElementRegistry, Shape, ShapeId, ShapeRegistry};
pub use snap::{GridSnapping, SnapConstraint};
