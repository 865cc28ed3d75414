//! Surface configuration: dimensions and background color.
//!
//! Defaults match the stock 800×600 board. Values can come from JSON (the
//! host passes whatever it has, missing keys fall back to defaults) or from
//! environment variables on native hosts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SURFACE_BACKGROUND, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::error::ConfigError;

pub const ENV_WIDTH: &str = "NESTBOARD_WIDTH";
pub const ENV_HEIGHT: &str = "NESTBOARD_HEIGHT";
pub const ENV_BACKGROUND: &str = "NESTBOARD_BACKGROUND";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Surface width in CSS pixels.
    pub width: f64,
    /// Surface height in CSS pixels.
    pub height: f64,
    /// Background color as a CSS color string.
    pub background: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            background: DEFAULT_SURFACE_BACKGROUND.to_owned(),
        }
    }
}

impl SurfaceConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the
    /// [`SurfaceConfig::validate`] errors for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `NESTBOARD_WIDTH`: default 800
    /// - `NESTBOARD_HEIGHT`: default 600
    /// - `NESTBOARD_BACKGROUND`: default `#d7d7d7`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] when a dimension is not a number, and the
    /// [`SurfaceConfig::validate`] errors for out-of-range values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cfg = Self {
            width: env_parse_f64(ENV_WIDTH, DEFAULT_SURFACE_WIDTH)?,
            height: env_parse_f64(ENV_HEIGHT, DEFAULT_SURFACE_HEIGHT)?,
            background: std::env::var(ENV_BACKGROUND).unwrap_or_else(|_| DEFAULT_SURFACE_BACKGROUND.to_owned()),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject non-positive or non-finite dimensions and an empty background.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimension`] or [`ConfigError::EmptyBackground`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;
        if self.background.trim().is_empty() {
            return Err(ConfigError::EmptyBackground);
        }
        Ok(())
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { name, value })
    }
}

fn env_parse_f64(key: &str, default: f64) -> Result<f64, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::Env { var: key.to_owned(), value: raw.clone() }),
        Err(_) => Ok(default),
    }
}
