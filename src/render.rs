//! Rendering: the backend seam and the scene draw pass.
//!
//! The engine never touches pixels itself. It drives a [`Renderer`] in a fixed
//! order (clear, then one `draw_rect` per shape in ascending z-index) and
//! never reads anything back. The browser backend lives in [`crate::web`].

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::doc::DocStore;
use crate::error::RenderError;
use crate::geometry::Bbox;
use crate::shape::RectStyle;

/// A drawing surface the engine can paint rectangles on.
pub trait Renderer {
    /// Size the surface and set its background.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn init_surface(&mut self, width: f64, height: f64, background: &str) -> Result<(), RenderError>;

    /// Erase everything drawn so far.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn clear(&mut self) -> Result<(), RenderError>;

    /// Fill and stroke one rectangle.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn draw_rect(&mut self, bbox: Bbox, style: &RectStyle) -> Result<(), RenderError>;
}

/// Draw the full scene: clear, then every shape bottom to top.
///
/// # Errors
///
/// Stops at and returns the first backend failure.
pub fn draw<R: Renderer + ?Sized>(renderer: &mut R, doc: &DocStore) -> Result<(), RenderError> {
    renderer.clear()?;
    for shape in doc.sorted_shapes() {
        renderer.draw_rect(shape.bounds(), &shape.style())?;
    }
    Ok(())
}
