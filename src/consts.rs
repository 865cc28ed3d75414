//! Shared constants for the nestboard crate.

// ── Surface ─────────────────────────────────────────────────────

/// Default surface width in CSS pixels.
pub const DEFAULT_SURFACE_WIDTH: f64 = 800.0;

/// Default surface height in CSS pixels.
pub const DEFAULT_SURFACE_HEIGHT: f64 = 600.0;

/// Default surface background color.
pub const DEFAULT_SURFACE_BACKGROUND: &str = "#d7d7d7";

// ── Rectangle styles ────────────────────────────────────────────

pub const RECT_IDLE_FILL: &str = "#FFB6C1";
pub const RECT_HIGHLIGHTED_FILL: &str = "rgba(58, 115, 249, 0.66)";
pub const RECT_STROKE: &str = "#000000";
pub const RECT_STROKE_WIDTH: f64 = 2.0;

// ── Area styles ─────────────────────────────────────────────────

pub const AREA_FILL: &str = "#FDF6E3";
pub const AREA_IDLE_STROKE: &str = "#666666";
pub const AREA_IDLE_STROKE_WIDTH: f64 = 1.0;
pub const AREA_HIGHLIGHTED_STROKE: &str = "#0758ee";
pub const AREA_HIGHLIGHTED_STROKE_WIDTH: f64 = 3.0;

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor shown while nothing is under the pointer.
pub const CURSOR_DEFAULT: &str = "default";

/// Cursor shown while hovering a draggable shape.
pub const CURSOR_GRAB: &str = "grab";

/// Cursor shown while a drag is in progress.
pub const CURSOR_GRABBING: &str = "grabbing";
