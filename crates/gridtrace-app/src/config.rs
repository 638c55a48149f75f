//! Application configuration supplied by the host page.

use gridtrace_core::config::{ConfigError, SurfaceConfig, SurfaceStyle};
use gridtrace_core::grid::DEFAULT_GRID_SIZE;
use serde::{Deserialize, Serialize};

/// Element ids and drawing options.
///
/// Every field is optional when deserialized; missing ones take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas_id: String,
    pub coords_id: String,
    pub paths_list_id: String,
    pub draw_mode_button_id: String,
    pub clear_button_id: String,
    pub grid_size: f64,
    pub style: SurfaceStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_id: "canvas".to_string(),
            coords_id: "coords-display".to_string(),
            paths_list_id: "paths-list".to_string(),
            draw_mode_button_id: "draw-mode-btn".to_string(),
            clear_button_id: "clear-paths-btn".to_string(),
            grid_size: DEFAULT_GRID_SIZE,
            style: SurfaceStyle::default(),
        }
    }
}

impl AppConfig {
    /// Validated surface configuration.
    pub fn surface_config(&self) -> Result<SurfaceConfig, ConfigError> {
        let config = SurfaceConfig {
            grid_size: self.grid_size,
            style: self.style,
        };
        config.validate()?;
        Ok(config)
    }
}
