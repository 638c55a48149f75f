//! GridTrace Render Library
//!
//! Renderer abstraction for GridTrace. The default implementation records a
//! backend-neutral [`Scene`] that the browser shell replays on a 2D canvas.

mod renderer;
mod scene;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use scene::{DrawCommand, Scene, SceneRenderer};
