//! Backend-neutral scene building.
//!
//! Draw order is fixed: background and grid, stored traces (the hovered
//! one highlighted), then the in-progress trace on top.

use crate::renderer::{RenderContext, Renderer};
use gridtrace_core::grid::GridLines;
use gridtrace_core::trace::Trace;
use kurbo::{BezPath, Point, Rect};
use peniko::Color;

/// One drawing command.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Fill a rectangle with a solid color.
    FillRect { rect: Rect, color: Color },
    /// Stroke a path with a solid color.
    Stroke {
        path: BezPath,
        color: Color,
        width: f64,
    },
}

/// Drawing commands for one frame, in paint order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn fill(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn stroke(&mut self, path: BezPath, color: Color, width: f64) {
        self.commands.push(DrawCommand::Stroke { path, color, width });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Renderer that records a [`Scene`] for a backend to replay.
#[derive(Debug, Default)]
pub struct SceneRenderer {
    scene: Scene,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene built by the last [`Renderer::build_scene`] call.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    fn render_grid(&mut self, ctx: &RenderContext) {
        let size = ctx.viewport_size;
        let background = self.background_color(ctx);
        self.scene.fill(Rect::from_origin_size(Point::ZERO, size), background);

        let lines = GridLines::for_viewport(size, ctx.grid_size);

        // Vertical lines
        for x in lines.vertical {
            let mut path = BezPath::new();
            path.move_to(Point::new(x, 0.0));
            path.line_to(Point::new(x, size.height));
            self.scene.stroke(path, ctx.grid_color, ctx.grid_line_width);
        }

        // Horizontal lines
        for y in lines.horizontal {
            let mut path = BezPath::new();
            path.move_to(Point::new(0.0, y));
            path.line_to(Point::new(size.width, y));
            self.scene.stroke(path, ctx.grid_color, ctx.grid_line_width);
        }
    }

    fn render_trace(&mut self, trace: &Trace, color: Color, width: f64) {
        if !trace.is_drawable() {
            return;
        }
        self.scene.stroke(trace.to_path(), color, width);
    }
}

impl Renderer for SceneRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        self.render_grid(ctx);

        let hovered = ctx.surface.hovered();
        for (idx, trace) in ctx.surface.traces().iter().enumerate() {
            let color = if hovered == Some(idx) {
                ctx.highlight_color
            } else {
                ctx.trace_color
            };
            self.render_trace(trace, color, ctx.trace_width);
        }

        if let Some(current) = ctx.surface.in_progress() {
            self.render_trace(current, ctx.trace_color, ctx.trace_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtrace_core::color::{self, SerializableColor};
    use gridtrace_core::Surface;
    use kurbo::Size;

    fn surface_with_traces(count: usize) -> Surface {
        let mut surface = Surface::default();
        let _ = surface.resize(Size::new(20.0, 10.0));
        let _ = surface.toggle_draw_mode();
        for i in 0..count {
            let y = i as f64;
            let _ = surface.pointer_down(Point::new(0.0, y));
            let _ = surface.pointer_move(Point::new(5.0, y));
            let _ = surface.pointer_up(Point::new(5.0, y));
        }
        surface
    }

    fn build(surface: &Surface) -> Scene {
        let mut renderer = SceneRenderer::new();
        renderer.build_scene(&RenderContext::new(surface));
        renderer.scene().clone()
    }

    /// Colors of the trace strokes (everything after the grid).
    fn trace_colors(scene: &Scene, grid_commands: usize) -> Vec<SerializableColor> {
        scene.commands()[grid_commands..]
            .iter()
            .map(|cmd| match cmd {
                DrawCommand::Stroke { color: stroke, .. } => SerializableColor::from(*stroke),
                DrawCommand::FillRect { .. } => panic!("unexpected fill after grid"),
            })
            .collect()
    }

    // 20x10 viewport with 10px grid: 3 vertical + 2 horizontal lines + 1 fill.
    const GRID_COMMANDS: usize = 6;

    #[test]
    fn test_grid_comes_first() {
        let scene = build(&surface_with_traces(0));
        assert_eq!(scene.len(), GRID_COMMANDS);

        match &scene.commands()[0] {
            DrawCommand::FillRect { rect, color: fill } => {
                assert_eq!(*rect, Rect::new(0.0, 0.0, 20.0, 10.0));
                assert_eq!(SerializableColor::from(*fill), color::BACKGROUND);
            }
            other => panic!("expected background fill, got {other:?}"),
        }
        for cmd in &scene.commands()[1..] {
            match cmd {
                DrawCommand::Stroke { color: stroke, width, .. } => {
                    assert_eq!(SerializableColor::from(*stroke), color::GRID_LINE);
                    assert!((width - 0.1).abs() < f64::EPSILON);
                }
                other => panic!("expected grid stroke, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_stored_traces_are_white() {
        let scene = build(&surface_with_traces(2));
        assert_eq!(trace_colors(&scene, GRID_COMMANDS), vec![color::TRACE, color::TRACE]);
    }

    #[test]
    fn test_hovered_trace_is_highlighted_alone() {
        let mut surface = surface_with_traces(2);
        // Sidebar entry of the first-drawn trace.
        let first = surface.sidebar().entries()[1].storage_index;
        let _ = surface.hover(Some(first));

        let scene = build(&surface);
        assert_eq!(
            trace_colors(&scene, GRID_COMMANDS),
            vec![color::HIGHLIGHT, color::TRACE]
        );
    }

    #[test]
    fn test_in_progress_drawn_on_top() {
        let mut surface = surface_with_traces(1);
        let _ = surface.pointer_down(Point::new(1.0, 1.0));
        assert_eq!(build(&surface).len(), GRID_COMMANDS + 1);

        let _ = surface.pointer_move(Point::new(2.0, 2.0));
        let scene = build(&surface);
        assert_eq!(scene.len(), GRID_COMMANDS + 2);
        match scene.commands().last().unwrap() {
            DrawCommand::Stroke { path, width, .. } => {
                assert_eq!(path.elements().len(), 2);
                assert_eq!(*width, 2.0);
            }
            other => panic!("expected in-progress stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_rebuild_replaces_previous_scene() {
        let surface = surface_with_traces(1);
        let mut renderer = SceneRenderer::new();
        renderer.build_scene(&RenderContext::new(&surface));
        renderer.build_scene(&RenderContext::new(&surface));
        assert_eq!(renderer.scene().len(), GRID_COMMANDS + 1);
    }
}
