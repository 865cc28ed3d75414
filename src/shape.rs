//! Shape model: the two rectangle variants, their style presets, and the
//! geometry queries the controller relies on.
//!
//! `Rectangle` and `Area` share one struct and differ only in the style table
//! selected through [`ShapeKind`]. Fields are private so that id and z-index
//! stay fixed after construction and highlight is only changed through
//! [`Shape::set_highlighted`].

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AREA_FILL, AREA_HIGHLIGHTED_STROKE, AREA_HIGHLIGHTED_STROKE_WIDTH, AREA_IDLE_STROKE, AREA_IDLE_STROKE_WIDTH,
    RECT_HIGHLIGHTED_FILL, RECT_IDLE_FILL, RECT_STROKE, RECT_STROKE_WIDTH,
};
use crate::geometry::{Bbox, Point, Size};

/// Caller-assigned identifier for a shape. Uniqueness is not checked.
pub type ShapeId = String;

/// The variant of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A draggable card; highlight changes its fill.
    Rectangle,
    /// A container region; highlight thickens and recolors its border.
    Area,
}

impl ShapeKind {
    /// Style preset for this kind in the given highlight state.
    #[must_use]
    pub fn style(self, highlighted: bool) -> RectStyle {
        match (self, highlighted) {
            (Self::Rectangle, false) => RectStyle { fill: RECT_IDLE_FILL, stroke: RECT_STROKE, stroke_width: RECT_STROKE_WIDTH },
            (Self::Rectangle, true) => {
                RectStyle { fill: RECT_HIGHLIGHTED_FILL, stroke: RECT_STROKE, stroke_width: RECT_STROKE_WIDTH }
            }
            (Self::Area, false) => {
                RectStyle { fill: AREA_FILL, stroke: AREA_IDLE_STROKE, stroke_width: AREA_IDLE_STROKE_WIDTH }
            }
            (Self::Area, true) => {
                RectStyle { fill: AREA_FILL, stroke: AREA_HIGHLIGHTED_STROKE, stroke_width: AREA_HIGHLIGHTED_STROKE_WIDTH }
            }
        }
    }
}

/// Fill and stroke used to draw one rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectStyle {
    /// Fill color as a CSS color string.
    pub fill: &'static str,
    /// Stroke color as a CSS color string.
    pub stroke: &'static str,
    /// Stroke width in surface units.
    pub stroke_width: f64,
}

/// A rectangle on the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    position: Point,
    size: Size,
    z_index: i64,
    #[serde(default)]
    highlighted: bool,
}

impl Shape {
    /// Create a shape of the given kind. Highlight starts off.
    #[must_use]
    pub fn new(kind: ShapeKind, id: impl Into<ShapeId>, position: Point, size: Size, z_index: i64) -> Self {
        Self { id: id.into(), kind, position, size, z_index, highlighted: false }
    }

    /// Create a [`ShapeKind::Rectangle`].
    #[must_use]
    pub fn rectangle(id: impl Into<ShapeId>, position: Point, size: Size, z_index: i64) -> Self {
        Self::new(ShapeKind::Rectangle, id, position, size, z_index)
    }

    /// Create a [`ShapeKind::Area`].
    #[must_use]
    pub fn area(id: impl Into<ShapeId>, position: Point, size: Size, z_index: i64) -> Self {
        Self::new(ShapeKind::Area, id, position, size, z_index)
    }

    // --- Accessors ---

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn z_index(&self) -> i64 {
        self.z_index
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Active style preset, chosen by kind and highlight state.
    #[must_use]
    pub fn style(&self) -> RectStyle {
        self.kind.style(self.highlighted)
    }

    // --- Mutation ---

    /// Move the shape. Highlight is left for the containment scan to recompute.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Resize the shape. Highlight is left for the containment scan to recompute.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Switch between the idle and highlighted style presets.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    // --- Geometry ---

    /// Bounding box, recomputed from position and size on every call.
    #[must_use]
    pub fn bounds(&self) -> Bbox {
        Bbox::new(self.position, self.size)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Hit test with inclusive edges.
    #[must_use]
    pub fn contains_point(&self, pt: Point) -> bool {
        self.bounds().contains_point(pt)
    }

    /// Whether this shape's bounds lie entirely within `other`'s, edges inclusive.
    #[must_use]
    pub fn is_fully_contained_within(&self, other: &Shape) -> bool {
        other.bounds().contains_bbox(&self.bounds())
    }
}
