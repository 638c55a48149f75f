//! Serializable colors and the default palette.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Canvas background behind the grid (`#041e47`).
pub const BACKGROUND: SerializableColor = SerializableColor::new(4, 30, 71, 255);
/// Grid line color (CSS `silver`).
pub const GRID_LINE: SerializableColor = SerializableColor::new(192, 192, 192, 255);
/// Stored and in-progress traces.
pub const TRACE: SerializableColor = SerializableColor::new(255, 255, 255, 255);
/// The trace hovered in the sidebar.
pub const HIGHLIGHT: SerializableColor = SerializableColor::new(255, 0, 0, 255);

/// An RGBA color that can round-trip through serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(...)` string, as accepted by canvas `fillStyle`/`strokeStyle`.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let alpha = f64::from(self.a) / 255.0;
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha)
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}
