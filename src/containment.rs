//! Containment scan: derives every shape's highlight flag from the full set.
//!
//! The scan clears all flags and then re-derives them from scratch, so a
//! highlight never outlives the nesting that caused it. Both ends of a
//! containment edge are highlighted even though containment itself is
//! directional.
//!
//! The scan is never triggered from shape setters; the engine calls it after
//! every change that can move bounds.

#[cfg(test)]
#[path = "containment_test.rs"]
mod containment_test;

use crate::shape::{Shape, ShapeId};

/// One containment relationship found by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainmentEdge {
    /// The shape lying inside.
    pub inner: ShapeId,
    /// The shape enclosing it.
    pub outer: ShapeId,
}

/// Result of a single [`scan`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Every ordered pair `(i, j)`, `i != j`, where `i` lies inside `j`.
    pub edges: Vec<ContainmentEdge>,
    /// Number of shapes left highlighted.
    pub highlighted: usize,
}

/// Reset every highlight, then highlight both shapes of each containment pair.
///
/// O(n²) over ordered pairs, no early exit. Running it twice without moving
/// anything produces identical flags.
pub fn scan(shapes: &mut [Shape]) -> ScanReport {
    for shape in shapes.iter_mut() {
        shape.set_highlighted(false);
    }

    let mut edges = Vec::new();
    for i in 0..shapes.len() {
        for j in 0..shapes.len() {
            if i == j {
                continue;
            }
            if shapes[i].is_fully_contained_within(&shapes[j]) {
                shapes[i].set_highlighted(true);
                shapes[j].set_highlighted(true);
                edges.push(ContainmentEdge { inner: shapes[i].id().to_owned(), outer: shapes[j].id().to_owned() });
            }
        }
    }

    let highlighted = shapes.iter().filter(|s| s.is_highlighted()).count();
    tracing::trace!(shapes = shapes.len(), edges = edges.len(), highlighted, "containment scan");
    ScanReport { edges, highlighted }
}
