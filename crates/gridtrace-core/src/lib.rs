//! GridTrace Core Library
//!
//! Platform-agnostic state for the GridTrace drawing surface: traces,
//! draw mode, hover and the sidebar view model.

pub mod color;
pub mod config;
pub mod grid;
pub mod readout;
pub mod sidebar;
pub mod surface;
pub mod trace;
pub mod traces;

pub use color::SerializableColor;
pub use config::{ConfigError, SurfaceConfig, SurfaceStyle};
pub use grid::{DEFAULT_GRID_SIZE, GridLines, MAX_GRID_LINES, MIN_GRID_SIZE};
pub use readout::Readout;
pub use sidebar::{SidebarEntry, SidebarView};
pub use surface::{Surface, SurfaceUpdate};
pub use trace::{Trace, TraceId};
pub use traces::TraceList;
