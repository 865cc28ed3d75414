//! Document model: the ordered shape collection owned by the engine.
//!
//! Insertion order is kept because hit-testing walks it back to front (the
//! last-added shape wins). Draw order is separate and comes from
//! [`DocStore::sorted_shapes`], which sorts by z-index.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::shape::Shape;

/// In-memory store of shapes, in insertion order.
#[derive(Debug, Default)]
pub struct DocStore {
    shapes: Vec<Shape>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a shape. Ids are not checked for uniqueness; returns `false`
    /// when another shape already uses the id so the caller can report it.
    pub fn push(&mut self, shape: Shape) -> bool {
        let unique = self.get(shape.id()).is_none();
        self.shapes.push(shape);
        unique
    }

    /// Remove the first shape with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Shape> {
        let idx = self.index_of(id)?;
        Some(self.shapes.remove(idx))
    }

    /// First shape with `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Mutable access to the first shape with `id`.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    /// All shapes in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// All shapes in insertion order, mutably. Used by the containment scan.
    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }

    /// Return all shapes sorted by ascending z-index for draw order.
    ///
    /// The sort is stable, so equal z-indices keep insertion order.
    #[must_use]
    pub fn sorted_shapes(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.iter().collect();
        shapes.sort_by_key(|s| s.z_index());
        shapes
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
