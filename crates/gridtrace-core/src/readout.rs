//! Coordinate readout shown under the canvas.

use kurbo::Point;
use std::fmt;

/// Pointer position rounded to whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Readout {
    pub x: i64,
    pub y: i64,
}

impl Readout {
    /// Readout shown when the pointer is off the canvas.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Round a canvas-local point, halves rounding up.
    pub fn from_point(point: Point) -> Self {
        Self {
            x: round_half_up(point.x),
            y: round_half_up(point.y),
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordenadas: (x: {}, y: {})", self.x, self.y)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
