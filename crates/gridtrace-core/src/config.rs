//! Surface configuration.

use crate::color::{self, SerializableColor};
use crate::grid::{DEFAULT_GRID_SIZE, MIN_GRID_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Grid size must be a finite number of at least 1px, got {0}")]
    InvalidGridSize(f64),
    #[error("Line width must be a positive finite number, got {0}")]
    InvalidLineWidth(f64),
}

/// Colors and line widths used to draw the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceStyle {
    pub background: SerializableColor,
    pub grid_color: SerializableColor,
    pub grid_line_width: f64,
    pub trace_color: SerializableColor,
    pub highlight_color: SerializableColor,
    pub trace_width: f64,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            background: color::BACKGROUND,
            grid_color: color::GRID_LINE,
            grid_line_width: 0.1,
            trace_color: color::TRACE,
            highlight_color: color::HIGHLIGHT,
            trace_width: 2.0,
        }
    }
}

/// Drawing surface configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Spacing between grid lines, in pixels.
    pub grid_size: f64,
    pub style: SurfaceStyle,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            style: SurfaceStyle::default(),
        }
    }
}

impl SurfaceConfig {
    pub fn with_grid_size(mut self, grid_size: f64) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Reject values that would make the grid or strokes degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid_size.is_finite() && self.grid_size >= MIN_GRID_SIZE) {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        for width in [self.style.grid_line_width, self.style.trace_width] {
            if !is_positive(width) {
                return Err(ConfigError::InvalidLineWidth(width));
            }
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SurfaceConfig::default();
        assert_eq!(config.grid_size, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_grid_size() {
        let config = SurfaceConfig::default().with_grid_size(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidGridSize(0.0)));

        let config = SurfaceConfig::default().with_grid_size(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_size_below_minimum() {
        let config = SurfaceConfig::default().with_grid_size(1e-9);
        assert_eq!(config.validate(), Err(ConfigError::InvalidGridSize(1e-9)));

        let config = SurfaceConfig::default().with_grid_size(0.5);
        assert!(config.validate().is_err());

        let config = SurfaceConfig::default().with_grid_size(MIN_GRID_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_line_width() {
        let mut config = SurfaceConfig::default();
        config.style.trace_width = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidLineWidth(-1.0)));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: SurfaceConfig = serde_json::from_str(r#"{"grid_size": 25.0}"#).unwrap();
        assert_eq!(config.grid_size, 25.0);
        assert_eq!(config.style, SurfaceStyle::default());
    }
}
