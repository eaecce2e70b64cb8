//! Pointer interaction with frame shapes.
//!
//! A frame only reacts to the pointer near its border. Clicks are decorated
//! with whether they landed on the border, presses on an unselected frame
//! fall through to its parent, and hovering never highlights a frame.

use crate::config::{DEFAULT_BORDER_OFFSET, InteractionConfig};
use crate::geometry::Bounds;
use crate::selection::SelectionState;
use crate::shapes::{ElementRegistry, ShapeId};
use kurbo::Point;

/// Kind of pointer interaction delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Click,
    MouseDown,
    Hover,
}

/// A single pointer interaction with an element.
///
/// `element` is the hit-test result of the host and may be redirected by
/// the handlers. `None` means the canvas itself.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionEvent {
    pub kind: InteractionKind,
    pub element: Option<ShapeId>,
    /// Pointer position in diagram coordinates.
    pub position: Point,
    on_border: Option<bool>,
}

impl InteractionEvent {
    /// Create a new event targeting `element`.
    pub fn new(kind: InteractionKind, element: Option<ShapeId>, position: Point) -> Self {
        Self {
            kind,
            element,
            position,
            on_border: None,
        }
    }

    /// Click event.
    pub fn click(element: ShapeId, position: Point) -> Self {
        Self::new(InteractionKind::Click, Some(element), position)
    }

    /// Mouse down event.
    pub fn mouse_down(element: ShapeId, position: Point) -> Self {
        Self::new(InteractionKind::MouseDown, Some(element), position)
    }

    /// Hover event.
    pub fn hover(element: ShapeId, position: Point) -> Self {
        Self::new(InteractionKind::Hover, Some(element), position)
    }

    /// Whether the click landed on a frame border.
    ///
    /// `None` until a frame click has been classified.
    pub fn on_border(&self) -> Option<bool> {
        self.on_border
    }
}

/// A handler for pointer interactions, registered by the host dispatcher.
pub trait InteractionHandler {
    fn handle(
        &self,
        event: &mut InteractionEvent,
        registry: &dyn ElementRegistry,
        selection: &dyn SelectionState,
    );
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Check whether `point` lies within `offset` of the border of `bounds`.
///
/// The bands straddle each edge line and are not clipped to the box, so a
/// point slightly outside the shape still counts. All ranges are inclusive.
pub fn is_on_border(point: Point, bounds: Bounds, offset: f64) -> bool {
    let Bounds { x, y, width, height } = bounds;

    let on_horizontal = in_range(point.x, x, x + width)
        && (in_range(point.y, y - offset, y + offset)
            || in_range(point.y, y + height - offset, y + height + offset));

    let on_vertical = in_range(point.y, y, y + height)
        && (in_range(point.x, x - offset, x + offset)
            || in_range(point.x, x + width - offset, x + width + offset));

    on_horizontal || on_vertical
}

/// Rewrites pointer interactions that target frame shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInteraction {
    offset: f64,
}

impl Default for FrameInteraction {
    fn default() -> Self {
        Self::new(DEFAULT_BORDER_OFFSET)
    }
}

impl FrameInteraction {
    /// Create the behavior with the given border tolerance.
    ///
    /// An offset of `0` falls back to [`DEFAULT_BORDER_OFFSET`].
    pub fn new(offset: f64) -> Self {
        debug_assert!(offset >= 0.0, "border offset must be non-negative, got {offset}");
        let offset = if offset == 0.0 { DEFAULT_BORDER_OFFSET } else { offset };
        Self { offset }
    }

    /// Create the behavior from validated configuration.
    pub fn from_config(config: &InteractionConfig) -> Self {
        Self::new(config.border_offset)
    }

    /// The border tolerance.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Frame targeted by the event, if any.
    fn frame_target(event: &InteractionEvent, registry: &dyn ElementRegistry) -> Option<ShapeId> {
        event.element.filter(|&id| registry.is_frame(id))
    }

    /// Decorate a click on a frame with its border classification.
    pub fn on_click(&self, event: &mut InteractionEvent, registry: &dyn ElementRegistry) {
        let Some(frame) = Self::frame_target(event, registry) else {
            return;
        };
        let Some(bounds) = registry.graphics_bounds(frame) else {
            return;
        };
        debug_assert!(bounds.is_well_formed(), "frame {frame} has negative size");

        let on_border = is_on_border(event.position, bounds, self.offset);
        log::trace!("Click on frame {} at {:?}: on_border={}", frame, event.position, on_border);
        event.on_border = Some(on_border);
    }

    /// Let presses on an unselected frame fall through to its parent.
    pub fn on_mouse_down(
        &self,
        event: &mut InteractionEvent,
        registry: &dyn ElementRegistry,
        selection: &dyn SelectionState,
    ) {
        let Some(frame) = Self::frame_target(event, registry) else {
            return;
        };
        if selection.is_selected(frame) {
            return;
        }

        event.element = registry.parent(frame);
        log::debug!("Mouse down on unselected frame {} redirected to {:?}", frame, event.element);
    }

    /// Never hover a frame; hover its parent instead.
    pub fn on_hover(&self, event: &mut InteractionEvent, registry: &dyn ElementRegistry) {
        let Some(frame) = Self::frame_target(event, registry) else {
            return;
        };

        event.element = registry.parent(frame);
        log::trace!("Hover on frame {} redirected to {:?}", frame, event.element);
    }
}

impl InteractionHandler for FrameInteraction {
    fn handle(
        &self,
        event: &mut InteractionEvent,
        registry: &dyn ElementRegistry,
        selection: &dyn SelectionState,
    ) {
        match event.kind {
            InteractionKind::Click => self.on_click(event, registry),
            InteractionKind::MouseDown => self.on_mouse_down(event, registry, selection),
            InteractionKind::Hover => self.on_hover(event, registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;
    use crate::shapes::{Shape, ShapeRegistry};

    fn frame_bounds() -> Bounds {
        Bounds::new(100.0, 100.0, 300.0, 300.0)
    }

    fn setup() -> (ShapeRegistry, ShapeId, ShapeId) {
        let mut registry = ShapeRegistry::new();
        let root = registry.insert(Shape::root());
        let frame = registry.insert(Shape::new(frame_bounds()).with_parent(root).as_frame());
        (registry, root, frame)
    }

    #[test]
    fn test_border_left_and_right() {
        assert!(is_on_border(Point::new(100.0, 150.0), frame_bounds(), 10.0));
        assert!(is_on_border(Point::new(400.0, 150.0), frame_bounds(), 10.0));
    }

    #[test]
    fn test_border_top_and_bottom() {
        assert!(is_on_border(Point::new(250.0, 105.0), frame_bounds(), 10.0));
        assert!(is_on_border(Point::new(250.0, 400.0), frame_bounds(), 10.0));
        // Outside the top band
        assert!(!is_on_border(Point::new(250.0, 130.0), frame_bounds(), 10.0));
    }

    #[test]
    fn test_interior_is_not_border() {
        assert!(!is_on_border(Point::new(250.0, 250.0), frame_bounds(), 10.0));
    }

    #[test]
    fn test_band_limits_are_inclusive() {
        let b = frame_bounds();
        assert!(is_on_border(Point::new(90.0, 250.0), b, 10.0));
        assert!(is_on_border(Point::new(110.0, 250.0), b, 10.0));
        assert!(!is_on_border(Point::new(89.999, 250.0), b, 10.0));
        assert!(!is_on_border(Point::new(110.001, 250.0), b, 10.0));
        assert!(is_on_border(Point::new(250.0, 410.0), b, 10.0));
        assert!(!is_on_border(Point::new(250.0, 410.001), b, 10.0));
    }

    #[test]
    fn test_bands_extend_outside_box() {
        // Left of the frame but within the band of the left edge
        assert!(is_on_border(Point::new(95.0, 300.0), frame_bounds(), 10.0));
        // Beyond the corner on both axes
        assert!(!is_on_border(Point::new(95.0, 95.0), frame_bounds(), 10.0));
    }

    #[test]
    fn test_zero_size_frame() {
        let b = Bounds::new(50.0, 50.0, 0.0, 0.0);
        assert!(is_on_border(Point::new(50.0, 55.0), b, 10.0));
        assert!(is_on_border(Point::new(45.0, 50.0), b, 10.0));
        assert!(!is_on_border(Point::new(51.0, 55.0), b, 10.0));
    }

    #[test]
    fn test_click_decorates_frame_event() {
        let (registry, _, frame) = setup();
        let behavior = FrameInteraction::default();

        let mut event = InteractionEvent::click(frame, Point::new(100.0, 150.0));
        behavior.on_click(&mut event, &registry);
        assert_eq!(event.on_border(), Some(true));
        assert_eq!(event.element, Some(frame));

        let mut event = InteractionEvent::click(frame, Point::new(250.0, 250.0));
        behavior.on_click(&mut event, &registry);
        assert_eq!(event.on_border(), Some(false));
    }

    #[test]
    fn test_click_uses_graphics_bounds() {
        let (mut registry, _, frame) = setup();
        registry.set_graphics_bounds(frame, Bounds::new(120.0, 100.0, 300.0, 300.0));
        let behavior = FrameInteraction::default();

        let mut event = InteractionEvent::click(frame, Point::new(100.0, 150.0));
        behavior.on_click(&mut event, &registry);
        assert_eq!(event.on_border(), Some(false));
    }

    #[test]
    fn test_click_ignores_non_frame() {
        let (mut registry, root, _) = setup();
        let rect = registry.insert(Shape::new(frame_bounds()).with_parent(root));
        let behavior = FrameInteraction::default();

        let mut event = InteractionEvent::click(rect, Point::new(100.0, 150.0));
        behavior.on_click(&mut event, &registry);
        assert_eq!(event.on_border(), None);
    }

    #[test]
    fn test_mouse_down_unselected_frame_falls_through() {
        let (registry, root, frame) = setup();
        let selection = Selection::new();
        let behavior = FrameInteraction::default();

        for position in [Point::new(250.0, 250.0), Point::new(100.0, 150.0)] {
            let mut event = InteractionEvent::mouse_down(frame, position);
            behavior.on_mouse_down(&mut event, &registry, &selection);
            assert_eq!(event.element, Some(root));
        }
    }

    #[test]
    fn test_mouse_down_selected_frame_stays() {
        let (registry, _, frame) = setup();
        let mut selection = Selection::new();
        selection.select(frame);
        let behavior = FrameInteraction::default();

        for position in [Point::new(250.0, 250.0), Point::new(100.0, 150.0)] {
            let mut event = InteractionEvent::mouse_down(frame, position);
            behavior.on_mouse_down(&mut event, &registry, &selection);
            assert_eq!(event.element, Some(frame));
        }
    }

    #[test]
    fn test_hover_always_redirects() {
        let (registry, root, frame) = setup();
        let mut selection = Selection::new();
        let behavior = FrameInteraction::default();

        let mut event = InteractionEvent::hover(frame, Point::new(100.0, 150.0));
        behavior.handle(&mut event, &registry, &selection);
        assert_eq!(event.element, Some(root));

        selection.select(frame);
        let mut event = InteractionEvent::hover(frame, Point::new(100.0, 150.0));
        behavior.handle(&mut event, &registry, &selection);
        assert_eq!(event.element, Some(root));
    }

    #[test]
    fn test_root_frame_redirects_to_canvas() {
        let mut registry = ShapeRegistry::new();
        let frame = registry.insert(Shape::new(frame_bounds()).as_frame());
        let behavior = FrameInteraction::default();

        let mut event = InteractionEvent::hover(frame, Point::new(250.0, 250.0));
        behavior.on_hover(&mut event, &registry);
        assert_eq!(event.element, None);
    }

    #[test]
    fn test_event_without_element_is_untouched() {
        let (registry, _, _) = setup();
        let selection = Selection::new();
        let behavior = FrameInteraction::default();

        for kind in [InteractionKind::Click, InteractionKind::MouseDown, InteractionKind::Hover] {
            let mut event = InteractionEvent::new(kind, None, Point::new(100.0, 150.0));
            let before = event.clone();
            behavior.handle(&mut event, &registry, &selection);
            assert_eq!(event, before);
        }
    }

    #[test]
    fn test_zero_offset_uses_default() {
        let (registry, _, frame) = setup();
        let behavior = FrameInteraction::new(0.0);
        assert_eq!(behavior.offset(), DEFAULT_BORDER_OFFSET);

        let mut event = InteractionEvent::click(frame, Point::new(105.0, 150.0));
        behavior.on_click(&mut event, &registry);
        assert_eq!(event.on_border(), Some(true));
    }

    #[test]
    fn test_custom_offset() {
        let (registry, _, frame) = setup();
        let behavior = FrameInteraction::new(2.0);
        assert_eq!(behavior.offset(), 2.0);

        let mut event = InteractionEvent::click(frame, Point::new(105.0, 150.0));
        behavior.on_click(&mut event, &registry);
        assert_eq!(event.on_border(), Some(false));
    }
}
