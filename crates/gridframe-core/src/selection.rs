//! Selection state consulted by the frame interaction handlers.

use crate::shapes::ShapeId;
use std::collections::HashSet;

/// Answers whether a shape is currently selected.
pub trait SelectionState {
    fn is_selected(&self, id: ShapeId) -> bool;
}

/// In-memory selection set.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<ShapeId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a single shape (clears other selections).
    pub fn select(&mut self, id: ShapeId) {
        self.clear();
        self.add(id);
    }

    /// Add a shape to the selection.
    pub fn add(&mut self, id: ShapeId) {
        self.selected.insert(id);
    }

    /// Remove a shape from the selection.
    pub fn deselect(&mut self, id: ShapeId) {
        self.selected.remove(&id);
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Iterate over the selected shape IDs.
    pub fn selected(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.selected.iter().copied()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl SelectionState for Selection {
    fn is_selected(&self, id: ShapeId) -> bool {
        self.selected.contains(&id)
    }
}
