//! The drawing surface: draw mode, trace capture, hover and deletion.
//!
//! Every operation runs to completion and returns a [`SurfaceUpdate`]
//! telling the host which views are now stale. The surface itself never
//! touches a canvas or the DOM.

use crate::config::SurfaceConfig;
use crate::readout::Readout;
use crate::sidebar::SidebarView;
use crate::trace::Trace;
use crate::traces::TraceList;
use kurbo::{Point, Size};

/// Views invalidated by a surface operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct SurfaceUpdate {
    /// The canvas must be re-rendered.
    pub redraw: bool,
    /// The sidebar must be rebuilt.
    pub refresh_list: bool,
    /// New text for the coordinate readout.
    pub readout: Option<Readout>,
    /// The draw-mode button must be restyled.
    pub draw_mode_changed: bool,
}

impl SurfaceUpdate {
    /// Nothing changed.
    pub const NONE: Self = Self {
        redraw: false,
        refresh_list: false,
        readout: None,
        draw_mode_changed: false,
    };

    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::NONE
        }
    }

    fn list_and_redraw() -> Self {
        Self {
            redraw: true,
            refresh_list: true,
            ..Self::NONE
        }
    }

    /// Combine two updates; the later readout wins.
    pub fn merge(self, other: Self) -> Self {
        Self {
            redraw: self.redraw || other.redraw,
            refresh_list: self.refresh_list || other.refresh_list,
            readout: other.readout.or(self.readout),
            draw_mode_changed: self.draw_mode_changed || other.draw_mode_changed,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Drawing surface state.
#[derive(Debug, Clone)]
pub struct Surface {
    config: SurfaceConfig,
    traces: TraceList,
    /// Trace being captured; never a member of `traces`.
    current: Trace,
    drawing: bool,
    draw_mode: bool,
    /// Storage index of the trace highlighted from the sidebar.
    hovered: Option<usize>,
    viewport: Size,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl Surface {
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            config,
            traces: TraceList::new(),
            current: Trace::new(),
            drawing: false,
            draw_mode: false,
            hovered: None,
            viewport: Size::ZERO,
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn grid_size(&self) -> f64 {
        self.config.grid_size
    }

    pub fn traces(&self) -> &TraceList {
        &self.traces
    }

    pub fn current(&self) -> &Trace {
        &self.current
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The in-progress trace, if it should be drawn on top.
    pub fn in_progress(&self) -> Option<&Trace> {
        (self.drawing && self.current.is_drawable()).then_some(&self.current)
    }

    /// Current sidebar contents.
    pub fn sidebar(&self) -> SidebarView {
        SidebarView::build(&self.traces, self.hovered)
    }

    /// Flip draw mode.
    pub fn toggle_draw_mode(&mut self) -> SurfaceUpdate {
        self.draw_mode = !self.draw_mode;
        log::debug!("Draw mode {}", if self.draw_mode { "on" } else { "off" });
        SurfaceUpdate {
            draw_mode_changed: true,
            ..SurfaceUpdate::NONE
        }
    }

    /// Begin capturing a trace at `point` (draw mode only).
    pub fn pointer_down(&mut self, point: Point) -> SurfaceUpdate {
        if !self.draw_mode {
            return SurfaceUpdate::NONE;
        }
        self.drawing = true;
        self.current = Trace::from_points(vec![point]);
        SurfaceUpdate::NONE
    }

    /// Track the pointer; extends the current trace while drawing.
    pub fn pointer_move(&mut self, point: Point) -> SurfaceUpdate {
        if self.drawing && self.draw_mode {
            self.current.add_point(point);
        }
        SurfaceUpdate {
            readout: Some(Readout::from_point(point)),
            ..SurfaceUpdate::redraw()
        }
    }

    /// Release the pointer. Ignored while draw mode is off, so a trace
    /// whose draw mode was toggled off mid-stroke is not committed here.
    pub fn pointer_up(&mut self, _point: Point) -> SurfaceUpdate {
        if !self.draw_mode {
            return SurfaceUpdate::NONE;
        }
        self.finish_current_trace()
    }

    /// The pointer left the canvas: reset the readout and, in draw mode,
    /// finish the trace exactly as a release would.
    pub fn pointer_leave(&mut self) -> SurfaceUpdate {
        let reset = SurfaceUpdate {
            readout: Some(Readout::ORIGIN),
            ..SurfaceUpdate::NONE
        };
        if !self.draw_mode {
            return reset;
        }
        reset.merge(self.finish_current_trace())
    }

    /// Stop drawing and commit the current trace if it has more than one
    /// point. Single-point traces are discarded.
    pub fn finish_current_trace(&mut self) -> SurfaceUpdate {
        self.drawing = false;
        let trace = std::mem::take(&mut self.current);

        if self.draw_mode && trace.len() > 1 {
            log::info!("Committed trace {} ({} points)", self.traces.len() + 1, trace.len());
            self.traces.push(trace);
            return SurfaceUpdate::list_and_redraw();
        }
        SurfaceUpdate::redraw()
    }

    /// The canvas backing store was resized. Stored coordinates are
    /// absolute pixels and are left as they are.
    pub fn resize(&mut self, viewport: Size) -> SurfaceUpdate {
        self.viewport = viewport;
        SurfaceUpdate::redraw()
    }

    /// Highlight a trace by storage index, or clear the highlight.
    pub fn hover(&mut self, index: Option<usize>) -> SurfaceUpdate {
        if let Some(idx) = index {
            if idx >= self.traces.len() {
                log::debug!("Ignoring hover on missing trace {idx}");
                return SurfaceUpdate::NONE;
            }
        }
        self.hovered = index;
        SurfaceUpdate::redraw()
    }

    /// Delete the trace at a storage index.
    ///
    /// A hover on the deleted trace is cleared; a hover on a later trace
    /// moves down with it.
    pub fn delete_at(&mut self, index: usize) -> SurfaceUpdate {
        if self.traces.remove(index).is_none() {
            log::debug!("Ignoring delete of missing trace {index}");
            return SurfaceUpdate::NONE;
        }
        log::info!("Deleted trace {} ({} left)", index + 1, self.traces.len());

        self.hovered = match self.hovered {
            Some(h) if h == index => None,
            Some(h) if h > index => Some(h - 1),
            other => other,
        };
        SurfaceUpdate::list_and_redraw()
    }

    /// Delete the trace shown at a sidebar position (0 = most recent).
    pub fn delete_at_display(&mut self, position: usize) -> SurfaceUpdate {
        match self.traces.storage_index(position) {
            Some(index) => self.delete_at(index),
            None => {
                log::debug!("Ignoring delete at display position {position}");
                SurfaceUpdate::NONE
            }
        }
    }

    /// Remove every trace, the current trace and the hover.
    pub fn clear_all(&mut self) -> SurfaceUpdate {
        if !self.traces.is_empty() {
            log::info!("Cleared {} traces", self.traces.len());
        }
        self.traces.clear();
        self.current = Trace::new();
        self.hovered = None;
        SurfaceUpdate::list_and_redraw()
    }
}
