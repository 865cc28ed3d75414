//! Error types for surface construction, configuration, and rendering.

use wasm_bindgen::JsValue;

/// Error returned by a [`crate::render::Renderer`] backend.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A call on the underlying drawing surface failed.
    #[error("render backend call failed: {0}")]
    Backend(String),
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        Self::Backend(format!("{value:?}"))
    }
}

/// Error returned when a [`crate::config::SurfaceConfig`] is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse surface config: {0}")]
    Parse(#[from] serde_json::Error),
    /// An environment variable was set but did not hold a number.
    #[error("invalid value for {var}: {value:?}")]
    Env { var: String, value: String },
    /// Width or height is zero, negative, or not finite.
    #[error("surface {name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
    /// The background color string is empty.
    #[error("surface background must not be empty")]
    EmptyBackground,
}

/// Fatal error while constructing a surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// No global `window` / `document` is available.
    #[error("no browser document available")]
    NoDocument,
    /// No element with the given id exists.
    #[error("canvas with id '{0}' not found")]
    CanvasNotFound(String),
    /// The element exists but is not a `<canvas>`.
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),
    /// The canvas did not provide a 2D context.
    #[error("could not get 2D context from canvas")]
    ContextUnavailable,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<SurfaceError> for JsValue {
    fn from(err: SurfaceError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
