//! Shapes and the element registry the interaction logic reads from.

use crate::geometry::Bounds;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// A diagram element as seen by the interaction layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    /// Logical bounds.
    pub bounds: Bounds,
    /// Owning container (None for the root).
    pub parent: Option<ShapeId>,
    /// Frame shapes are only interactive near their border.
    #[serde(default)]
    pub frame: bool,
}

impl Shape {
    /// Create a new shape with no parent.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            id: Uuid::new_v4(),
            bounds,
            parent: None,
            frame: false,
        }
    }

    /// Create a root element (empty bounds, no parent).
    pub fn root() -> Self {
        Self::new(Bounds::default())
    }

    /// Create a shape with a specific ID.
    pub fn with_id(id: ShapeId, bounds: Bounds) -> Self {
        Self {
            id,
            ..Self::new(bounds)
        }
    }

    /// Set the parent container.
    pub fn with_parent(mut self, parent: ShapeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Mark this shape as a frame.
    pub fn as_frame(mut self) -> Self {
        self.frame = true;
        self
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }
}

/// Read access to the shapes of a diagram.
pub trait ElementRegistry {
    /// Look up a shape.
    fn shape(&self, id: ShapeId) -> Option<&Shape>;

    /// Rendered bounding box of a shape.
    ///
    /// May differ slightly from the logical bounds because of rendering
    /// offsets. Defaults to the logical bounds.
    fn graphics_bounds(&self, id: ShapeId) -> Option<Bounds> {
        self.shape(id).map(|shape| shape.bounds)
    }

    /// Parent of a shape, if it has one.
    fn parent(&self, id: ShapeId) -> Option<ShapeId> {
        self.shape(id).and_then(|shape| shape.parent)
    }

    /// Whether the shape exists and is a frame.
    fn is_frame(&self, id: ShapeId) -> bool {
        self.shape(id).is_some_and(|shape| shape.frame)
    }
}

/// In-memory element registry.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<ShapeId, Shape>,
    /// Insertion order of shapes.
    order: Vec<ShapeId>,
    /// Rendered bounds that differ from the logical ones.
    graphics: HashMap<ShapeId, Bounds>,
}

impl ShapeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape, replacing any shape with the same ID. Returns the ID.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        debug_assert!(shape.bounds.is_well_formed(), "shape {} has negative size", shape.id);
        let id = shape.id;
        if self.shapes.insert(id, shape).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Remove a shape and any rendered-bounds override for it.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let shape = self.shapes.remove(&id)?;
        self.order.retain(|&other| other != id);
        self.graphics.remove(&id);
        Some(shape)
    }

    /// Override the rendered bounds of a shape.
    pub fn set_graphics_bounds(&mut self, id: ShapeId, bounds: Bounds) {
        if self.shapes.contains_key(&id) {
            self.graphics.insert(id, bounds);
        } else {
            log::warn!("Ignoring graphics bounds for unknown shape {}", id);
        }
    }

    /// Direct children of a shape, in insertion order.
    pub fn children(&self, id: ShapeId) -> Vec<ShapeId> {
        self.order
            .iter()
            .copied()
            .filter(|child| self.shapes.get(child).is_some_and(|s| s.parent == Some(id)))
            .collect()
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the registry has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl ElementRegistry for ShapeRegistry {
    fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    fn graphics_bounds(&self, id: ShapeId) -> Option<Bounds> {
        self.graphics
            .get(&id)
            .copied()
            .or_else(|| self.shapes.get(&id).map(|shape| shape.bounds))
    }
}
