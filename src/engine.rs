use tracing::{debug, warn};

use crate::config::SurfaceConfig;
use crate::consts::{CURSOR_DEFAULT, CURSOR_GRAB, CURSOR_GRABBING};
use crate::containment::{self, ScanReport};
use crate::doc::DocStore;
use crate::error::{RenderError, SurfaceError};
use crate::geometry::Point;
use crate::hit;
use crate::input::{DragState, DragUpdate, PointerEvent};
use crate::render::{self, Renderer};
use crate::shape::{Shape, ShapeId};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The CSS cursor over the surface should change.
    SetCursor(String),
    /// A containment scan flipped this shape's highlight.
    HighlightChanged { id: ShapeId, highlighted: bool },
    /// The scene changed and must be redrawn.
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on a render backend.
///
/// Separated from `Engine` so it can be tested without a canvas. Owns the
/// shape collection and the drag state; nothing else holds a mutable
/// reference to either.
#[derive(Debug)]
pub struct EngineCore {
    doc: DocStore,
    drag: DragState,
    cursor: String,
    scan_count: u64,
    last_scan: ScanReport,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            doc: DocStore::new(),
            drag: DragState::default(),
            cursor: CURSOR_DEFAULT.to_owned(),
            scan_count: 0,
            last_scan: ScanReport::default(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Shape collection ---

    /// Append a shape, rescan containment, and request a redraw.
    pub fn add_shape(&mut self, shape: Shape) -> Vec<Action> {
        let id = shape.id().to_owned();
        if !self.doc.push(shape) {
            warn!(%id, "duplicate shape id; lookups resolve to the first match");
        }
        debug!(%id, count = self.doc.len(), "shape added");

        let mut actions = Vec::new();
        self.rescan(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove a shape by id.
    ///
    /// If it was being dragged the drag is dropped before anything else can
    /// touch it. Unknown ids produce no actions.
    pub fn remove_shape(&mut self, id: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.doc.remove(id).is_none() {
            return actions;
        }
        if self.drag.invalidate(id) {
            debug!(%id, "drag target removed; drag cancelled");
            self.set_cursor(CURSOR_DEFAULT, &mut actions);
        }
        debug!(%id, count = self.doc.len(), "shape removed");

        self.rescan(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Pointer input ---

    /// Dispatch a pointer event to the matching handler.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        match event {
            PointerEvent::Down(pt) => self.on_pointer_down(pt),
            PointerEvent::Move(pt) => self.on_pointer_move(pt),
            PointerEvent::Up(pt) => self.on_pointer_up(pt),
            PointerEvent::Leave(pt) => self.on_pointer_leave(pt),
        }
    }

    /// Start dragging the topmost shape under the pointer, if any.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        let Some(shape) = hit::hit_test(pt, &self.doc) else {
            return actions;
        };
        debug!(id = shape.id(), x = pt.x, y = pt.y, "drag started");
        self.drag.start_drag(shape, pt);
        self.set_cursor(CURSOR_GRABBING, &mut actions);
        actions
    }

    /// Move the dragged shape, or update the hover cursor when idle.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        match self.drag.update_drag(&mut self.doc, pt) {
            DragUpdate::Moved(_) => {
                self.rescan(&mut actions);
                actions.push(Action::RenderNeeded);
            }
            DragUpdate::Orphaned => {
                warn!(x = pt.x, y = pt.y, "drag target no longer exists; drag reset");
                self.hover(pt, &mut actions);
            }
            DragUpdate::Idle => self.hover(pt, &mut actions),
        }
        actions
    }

    /// Release the dragged shape.
    pub fn on_pointer_up(&mut self, _pt: Point) -> Vec<Action> {
        self.finish_drag(false)
    }

    /// Cancel the drag when the pointer leaves the surface.
    ///
    /// The shape stays where the last move put it.
    pub fn on_pointer_leave(&mut self, _pt: Point) -> Vec<Action> {
        self.finish_drag(true)
    }

    // --- Queries ---

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.doc.get(id)
    }

    /// All shapes in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        self.doc.shapes()
    }

    #[must_use]
    pub fn doc(&self) -> &DocStore {
        &self.doc
    }

    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Cursor the host should currently show.
    #[must_use]
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Number of containment scans run so far.
    #[must_use]
    pub fn scan_count(&self) -> u64 {
        self.scan_count
    }

    /// Report from the most recent containment scan.
    #[must_use]
    pub fn last_scan(&self) -> &ScanReport {
        &self.last_scan
    }

    // --- Internals ---

    fn finish_drag(&mut self, cancel: bool) -> Vec<Action> {
        let mut actions = Vec::new();
        let Some(id) = self.drag.dragged_id().map(str::to_owned) else {
            return actions;
        };
        if cancel {
            self.drag.reset();
        } else {
            self.drag.end_drag();
        }
        debug!(%id, cancel, "drag ended");

        self.rescan(&mut actions);
        actions.push(Action::RenderNeeded);
        self.set_cursor(CURSOR_DEFAULT, &mut actions);
        actions
    }

    fn hover(&mut self, pt: Point, actions: &mut Vec<Action>) {
        let cursor = if hit::hit_test(pt, &self.doc).is_some() { CURSOR_GRAB } else { CURSOR_DEFAULT };
        self.set_cursor(cursor, actions);
    }

    fn set_cursor(&mut self, cursor: &str, actions: &mut Vec<Action>) {
        if self.cursor != cursor {
            cursor.clone_into(&mut self.cursor);
            actions.push(Action::SetCursor(cursor.to_owned()));
        }
    }

    /// Run the containment scan and report every highlight that flipped.
    fn rescan(&mut self, actions: &mut Vec<Action>) {
        let before: Vec<bool> = self.doc.shapes().iter().map(Shape::is_highlighted).collect();
        self.last_scan = containment::scan(self.doc.shapes_mut());
        self.scan_count += 1;

        for (shape, was) in self.doc.shapes().iter().zip(before) {
            if shape.is_highlighted() != was {
                actions.push(Action::HighlightChanged { id: shape.id().to_owned(), highlighted: shape.is_highlighted() });
            }
        }
    }
}

/// The full engine. Wraps `EngineCore` and owns the render backend.
///
/// Every handler forwards to the core and then redraws if the core asked for
/// it. Render failures are logged, not returned, so one bad frame never
/// interrupts input handling.
pub struct Engine<R: Renderer> {
    renderer: R,
    config: SurfaceConfig,
    core: EngineCore,
}

impl<R: Renderer> Engine<R> {
    /// Create an engine, size the surface, and draw the empty scene.
    ///
    /// # Errors
    ///
    /// Fails if `config` is invalid or the backend rejects initialization.
    pub fn new(mut renderer: R, config: SurfaceConfig) -> Result<Self, SurfaceError> {
        config.validate()?;
        renderer.init_surface(config.width, config.height, &config.background)?;
        let mut engine = Self { renderer, config, core: EngineCore::new() };
        engine.render()?;
        Ok(engine)
    }

    // --- Delegated mutations ---

    pub fn add_shape(&mut self, shape: Shape) -> Vec<Action> {
        let actions = self.core.add_shape(shape);
        self.apply(&actions);
        actions
    }

    pub fn remove_shape(&mut self, id: &str) -> Vec<Action> {
        let actions = self.core.remove_shape(id);
        self.apply(&actions);
        actions
    }

    // --- Input events ---

    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        let actions = self.core.handle(event);
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.handle(PointerEvent::Down(pt))
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.handle(PointerEvent::Move(pt))
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        self.handle(PointerEvent::Up(pt))
    }

    pub fn on_pointer_leave(&mut self, pt: Point) -> Vec<Action> {
        self.handle(PointerEvent::Leave(pt))
    }

    // --- Render ---

    /// Draw the current state to the backend.
    ///
    /// # Errors
    ///
    /// Returns the first backend failure.
    pub fn render(&mut self) -> Result<(), RenderError> {
        render::draw(&mut self.renderer, self.core.doc())
    }

    fn apply(&mut self, actions: &[Action]) {
        if !actions.iter().any(|a| matches!(a, Action::RenderNeeded)) {
            return;
        }
        if let Err(e) = self.render() {
            warn!(error = %e, "render failed");
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.core
    }

    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
