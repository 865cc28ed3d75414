//! Browser entry point: binds an engine to a `<canvas>` and seeds the stock
//! scene (one area on the right, one rectangle on the left).
//!
//! The host page forwards pointer events in canvas-local coordinates; cursor
//! changes requested by the engine are applied to the canvas here.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use tracing::info;
use wasm_bindgen::prelude::*;

use crate::config::SurfaceConfig;
use crate::engine::{Action, Engine};
use crate::error::SurfaceError;
use crate::geometry::{Point, Size};
use crate::shape::Shape;
use crate::web::CanvasRenderer;

/// Size of the stock area.
const SAMPLE_AREA_SIZE: Size = Size { width: 350.0, height: 300.0 };

/// Size of the stock rectangle.
const SAMPLE_RECT_SIZE: Size = Size { width: 120.0, height: 80.0 };

/// The stock scene, vertically centered on a surface of the given config.
#[must_use]
pub fn sample_shapes(config: &SurfaceConfig) -> Vec<Shape> {
    vec![
        Shape::area("area-1", Point::new(400.0, (config.height - SAMPLE_AREA_SIZE.height) / 2.0), SAMPLE_AREA_SIZE, 0),
        Shape::rectangle("rect-1", Point::new(200.0, (config.height - SAMPLE_RECT_SIZE.height) / 2.0), SAMPLE_RECT_SIZE, 1),
    ]
}

#[wasm_bindgen]
pub struct WhiteboardApp {
    engine: Engine<CanvasRenderer>,
}

#[wasm_bindgen]
impl WhiteboardApp {
    /// Bind to `<canvas id="canvas_id">` with the default surface config.
    ///
    /// # Errors
    ///
    /// Fails if the canvas or its 2D context is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WhiteboardApp, JsValue> {
        Ok(Self::with_config(canvas_id, SurfaceConfig::default())?)
    }

    /// Bind to a canvas using a JSON surface config (missing keys take defaults).
    ///
    /// # Errors
    ///
    /// Fails on malformed config or an unavailable canvas.
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(canvas_id: &str, config_json: &str) -> Result<WhiteboardApp, JsValue> {
        let config = SurfaceConfig::from_json(config_json).map_err(SurfaceError::from)?;
        Ok(Self::with_config(canvas_id, config)?)
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_down(Point::new(x, y));
        self.apply_cursor(&actions)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_move(Point::new(x, y));
        self.apply_cursor(&actions)
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_up(Point::new(x, y));
        self.apply_cursor(&actions)
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_leave(Point::new(x, y));
        self.apply_cursor(&actions)
    }

    /// Whether the shape with `id` is currently highlighted. Unknown ids are not.
    #[wasm_bindgen(js_name = isHighlighted)]
    #[must_use]
    pub fn is_highlighted(&self, id: &str) -> bool {
        self.engine.core().shape(id).is_some_and(Shape::is_highlighted)
    }

    #[wasm_bindgen(js_name = shapeCount)]
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.engine.core().shapes().len()
    }
}

impl WhiteboardApp {
    fn with_config(canvas_id: &str, config: SurfaceConfig) -> Result<Self, SurfaceError> {
        let renderer = CanvasRenderer::from_element_id(canvas_id)?;
        let mut engine = Engine::new(renderer, config)?;
        for shape in sample_shapes(engine.config()) {
            engine.add_shape(shape);
        }
        info!(canvas_id, shapes = engine.core().shapes().len(), "whiteboard ready");
        Ok(Self { engine })
    }

    fn apply_cursor(&self, actions: &[Action]) -> Result<(), JsValue> {
        for action in actions {
            if let Action::SetCursor(cursor) = action {
                self.engine.renderer().set_cursor(cursor)?;
            }
        }
        Ok(())
    }
}
