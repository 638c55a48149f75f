//! GridTrace Application
//!
//! The browser shell: binds a canvas, a coordinate readout, a trace list
//! and two buttons on the host page to the drawing surface.

mod config;
mod error;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod shared;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod theme;

pub use config::AppConfig;
pub use error::AppError;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas2d;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use app::GridTrace;
#[cfg(target_arch = "wasm32")]
pub use web::start;
