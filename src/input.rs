//! Input model: pointer events and the drag state machine.
//!
//! `PointerEvent` is what the host delivers, already translated into
//! surface-local coordinates. `DragState` tracks the gesture between
//! pointer-down and pointer-up. It refers to the dragged shape by id only and
//! resolves that id against the [`DocStore`] each time it moves the shape, so
//! a shape removed mid-drag can never be mutated through a stale handle.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::DocStore;
use crate::geometry::Point;
use crate::shape::{Shape, ShapeId};

/// A pointer event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    /// The pointer left the surface.
    Leave(Point),
}

impl PointerEvent {
    /// Surface-local position carried by the event.
    #[must_use]
    pub fn position(self) -> Point {
        match self {
            Self::Down(p) | Self::Move(p) | Self::Up(p) | Self::Leave(p) => p,
        }
    }
}

/// Drag gesture state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A shape is following the pointer.
    Dragging {
        /// Id of the shape being dragged. Never owns the shape.
        id: ShapeId,
        /// Pointer position minus shape origin at drag start. Fixed for the gesture.
        offset: Point,
        /// Pointer position at the previous event.
        last: Point,
    },
}

/// Outcome of [`DragState::update_drag`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// No drag in progress; nothing was touched.
    Idle,
    /// The dragged shape moved to this origin.
    Moved(Point),
    /// The drag target no longer exists; the state was reset.
    Orphaned,
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Id of the shape being dragged, if any.
    #[must_use]
    pub fn dragged_id(&self) -> Option<&str> {
        match self {
            Self::Dragging { id, .. } => Some(id.as_str()),
            Self::Idle => None,
        }
    }

    /// Offset from shape origin to pointer. Zero when idle.
    #[must_use]
    pub fn offset(&self) -> Point {
        match self {
            Self::Dragging { offset, .. } => *offset,
            Self::Idle => Point::default(),
        }
    }

    /// Last pointer position seen while dragging. Zero when idle.
    #[must_use]
    pub fn last_position(&self) -> Point {
        match self {
            Self::Dragging { last, .. } => *last,
            Self::Idle => Point::default(),
        }
    }

    /// Begin dragging `shape` from pointer position `pointer`.
    ///
    /// Replaces any gesture already in progress.
    pub fn start_drag(&mut self, shape: &Shape, pointer: Point) {
        *self = Self::Dragging { id: shape.id().to_owned(), offset: pointer - shape.position(), last: pointer };
    }

    /// Move the dragged shape so that it keeps its offset from `pointer`.
    ///
    /// Does nothing while idle. If the target id no longer resolves in `doc`
    /// the state is reset and [`DragUpdate::Orphaned`] is returned.
    pub fn update_drag(&mut self, doc: &mut DocStore, pointer: Point) -> DragUpdate {
        let Self::Dragging { id, offset, last } = self else {
            return DragUpdate::Idle;
        };
        let Some(shape) = doc.get_mut(id) else {
            self.reset();
            return DragUpdate::Orphaned;
        };
        let origin = pointer - *offset;
        shape.set_position(origin);
        *last = pointer;
        DragUpdate::Moved(origin)
    }

    /// Finish the gesture, releasing the shape reference.
    pub fn end_drag(&mut self) {
        *self = Self::Idle;
    }

    /// Return to idle with offset and last position zeroed.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Reset if `id` is the current drag target. Returns whether it was.
    pub fn invalidate(&mut self, id: &str) -> bool {
        if self.dragged_id() == Some(id) {
            self.reset();
            return true;
        }
        false
    }
}
