//! Browser backend: a [`Renderer`] over an HTML `<canvas>` 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{RenderError, SurfaceError};
use crate::geometry::Bbox;
use crate::render::Renderer;
use crate::shape::RectStyle;

/// Canvas-backed renderer.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Look up `<canvas id="...">` in the current document.
    ///
    /// # Errors
    ///
    /// Fails when there is no document, no element with that id, the element
    /// is not a canvas, or it has no 2D context.
    pub fn from_element_id(canvas_id: &str) -> Result<Self, SurfaceError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SurfaceError::NoDocument)?;
        let element = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SurfaceError::CanvasNotFound(canvas_id.to_owned()))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SurfaceError::NotACanvas(canvas_id.to_owned()))?;
        Self::new(canvas)
    }

    /// Bind to an existing canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ContextUnavailable`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| SurfaceError::ContextUnavailable)?,
            Ok(None) | Err(_) => return Err(SurfaceError::ContextUnavailable),
        };
        Ok(Self { canvas, ctx })
    }

    /// Set the CSS cursor shown over the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style declaration rejects the value.
    pub fn set_cursor(&self, cursor: &str) -> Result<(), RenderError> {
        self.canvas.style().set_property("cursor", cursor)?;
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn init_surface(&mut self, width: f64, height: f64, background: &str) -> Result<(), RenderError> {
        self.canvas.set_width(width.round() as u32);
        self.canvas.set_height(height.round() as u32);
        self.canvas.style().set_property("background-color", background)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        let w = f64::from(self.canvas.width());
        let h = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
        Ok(())
    }

    fn draw_rect(&mut self, bbox: Bbox, style: &RectStyle) -> Result<(), RenderError> {
        self.ctx.save();

        self.ctx.set_fill_style_str(style.fill);
        self.ctx.fill_rect(bbox.x, bbox.y, bbox.width, bbox.height);

        self.ctx.set_stroke_style_str(style.stroke);
        self.ctx.set_line_width(style.stroke_width);
        self.ctx.stroke_rect(bbox.x, bbox.y, bbox.width, bbox.height);

        self.ctx.restore();
        Ok(())
    }
}
