//! Replays a [`Scene`] on a 2D canvas context.

use gridtrace_core::SerializableColor;
use gridtrace_render::{DrawCommand, RenderResult, RendererError, Scene};
use kurbo::{BezPath, PathEl};
use peniko::Color;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D presentation backend.
pub struct Canvas2dBackend {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dBackend {
    /// Acquire the 2D context of a canvas.
    pub fn new(canvas: &HtmlCanvasElement) -> RenderResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| RendererError::InitFailed(format!("{err:?}")))?
            .ok_or_else(|| RendererError::InitFailed("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RendererError::InitFailed("not a 2d context".to_string()))?;
        Ok(Self { ctx })
    }

    /// Paint every command of the scene in order.
    pub fn present(&self, scene: &Scene) {
        for command in scene.commands() {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    self.ctx.set_fill_style_str(&css(*color));
                    self.ctx.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
                }
                DrawCommand::Stroke { path, color, width } => {
                    if path.elements().is_empty() {
                        continue;
                    }
                    self.ctx.save();
                    self.ctx.set_stroke_style_str(&css(*color));
                    self.ctx.set_line_width(*width);
                    self.trace_path(path);
                    self.ctx.stroke();
                    self.ctx.restore();
                }
            }
        }
    }

    fn trace_path(&self, path: &BezPath) {
        self.ctx.begin_path();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathEl::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathEl::QuadTo(c, p) => self.ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
                PathEl::CurveTo(c1, c2, p) => {
                    self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y)
                }
                PathEl::ClosePath => self.ctx.close_path(),
            }
        }
    }
}

fn css(color: Color) -> String {
    SerializableColor::from(color).to_css()
}
