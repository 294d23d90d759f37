//! Studio configuration.
//!
//! The host page may supply a JSON object; every field is optional and falls
//! back to its default.
//!
//! # Fields
//!
//! - `canvas_width` - Canvas width in pixels (default: 400)
//! - `min_canvas_height` - Height the canvas never shrinks below (default: 400)
//! - `item_width` / `item_height` - Size of every placed item (default: 116)
//! - `toast_limit` - Maximum visible notifications (default: 3)
//! - `toast_duration_ms` - Notification lifetime (default: 5000)
//! - `log_filter` - `tracing` filter directive for the browser console

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Size;

const DEFAULT_CANVAS_WIDTH: f64 = 400.0;
const DEFAULT_MIN_CANVAS_HEIGHT: f64 = 400.0;
const DEFAULT_ITEM_SIZE: f64 = 116.0;
const DEFAULT_TOAST_LIMIT: usize = 3;
const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;
const DEFAULT_LOG_FILTER: &str = "info,style_canvas_core=debug";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must be a positive, finite number (got {1})")]
    InvalidDimension(&'static str, f64),
    #[error("item {item} exceeds canvas {canvas} ({item_size} > {canvas_size})")]
    ItemLargerThanCanvas {
        item: &'static str,
        canvas: &'static str,
        item_size: f64,
        canvas_size: f64,
    },
    #[error("toast_limit must be at least 1")]
    ZeroToastLimit,
}

/// Layout and presentation settings for one studio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub canvas_width: f64,
    pub min_canvas_height: f64,
    pub item_width: f64,
    pub item_height: f64,
    pub toast_limit: usize,
    pub toast_duration_ms: u32,
    pub log_filter: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            min_canvas_height: DEFAULT_MIN_CANVAS_HEIGHT,
            item_width: DEFAULT_ITEM_SIZE,
            item_height: DEFAULT_ITEM_SIZE,
            toast_limit: DEFAULT_TOAST_LIMIT,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StudioConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed or the values fail
    /// [`StudioConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every dimension is usable and that an item fits the canvas.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("canvas_width", self.canvas_width)?;
        check_dimension("min_canvas_height", self.min_canvas_height)?;
        check_dimension("item_width", self.item_width)?;
        check_dimension("item_height", self.item_height)?;

        if self.item_width > self.canvas_width {
            return Err(ConfigError::ItemLargerThanCanvas {
                item: "item_width",
                canvas: "canvas_width",
                item_size: self.item_width,
                canvas_size: self.canvas_width,
            });
        }
        if self.item_height > self.min_canvas_height {
            return Err(ConfigError::ItemLargerThanCanvas {
                item: "item_height",
                canvas: "min_canvas_height",
                item_size: self.item_height,
                canvas_size: self.min_canvas_height,
            });
        }
        if self.toast_limit == 0 {
            return Err(ConfigError::ZeroToastLimit);
        }
        Ok(())
    }

    /// Size of a placed item.
    #[must_use]
    pub const fn item_size(&self) -> Size {
        Size::new(self.item_width, self.item_height)
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension(name, value))
    }
}
