//! Background grid geometry.

use kurbo::Size;

/// Default spacing between grid lines, in pixels.
pub const DEFAULT_GRID_SIZE: f64 = 10.0;

/// Smallest grid spacing accepted by the configuration, in pixels.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Upper bound on lines per axis, whatever the spacing.
pub const MAX_GRID_LINES: u32 = 10_000;

/// Positions of the grid lines covering a viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    /// X positions of vertical lines.
    pub vertical: Vec<f64>,
    /// Y positions of horizontal lines.
    pub horizontal: Vec<f64>,
}

impl GridLines {
    /// Lines at `0, g, 2g, ...` up to and including the viewport edge.
    pub fn for_viewport(viewport: Size, grid_size: f64) -> Self {
        Self {
            vertical: positions(viewport.width, grid_size),
            horizontal: positions(viewport.height, grid_size),
        }
    }

    pub fn len(&self) -> usize {
        self.vertical.len() + self.horizontal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

fn positions(extent: f64, grid_size: f64) -> Vec<f64> {
    if grid_size.is_nan() || grid_size <= 0.0 || !extent.is_finite() || extent < 0.0 {
        return Vec::new();
    }

    (0..MAX_GRID_LINES)
        .map(|step| f64::from(step) * grid_size)
        .take_while(|pos| *pos <= extent)
        .collect()
}
