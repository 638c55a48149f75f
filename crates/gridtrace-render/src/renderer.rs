//! Renderer trait abstraction.

use gridtrace_core::surface::Surface;
use kurbo::Size;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The surface to render.
    pub surface: &'a Surface,
    /// Canvas backing-store size in pixels.
    pub viewport_size: Size,
    /// Spacing between grid lines.
    pub grid_size: f64,
    /// Background color.
    pub background_color: Color,
    pub grid_color: Color,
    pub grid_line_width: f64,
    /// Color of stored and in-progress traces.
    pub trace_color: Color,
    /// Color of the hovered trace.
    pub highlight_color: Color,
    pub trace_width: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context from the surface's own configuration.
    pub fn new(surface: &'a Surface) -> Self {
        let config = surface.config();
        let style = &config.style;
        Self {
            surface,
            viewport_size: surface.viewport(),
            grid_size: config.grid_size,
            background_color: style.background.into(),
            grid_color: style.grid_color.into(),
            grid_line_width: style.grid_line_width,
            trace_color: style.trace_color.into(),
            highlight_color: style.highlight_color.into(),
            trace_width: style.trace_width,
        }
    }
}

/// Trait for rendering backends.
///
/// Implementations record or issue drawing commands for one frame.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
