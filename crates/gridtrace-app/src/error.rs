//! Application errors.

use gridtrace_core::config::ConfigError;
use gridtrace_render::RendererError;
use thiserror::Error;

/// Errors raised while mounting the widget on a page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No window or document available")]
    NoDocument,
    #[error("Missing element: #{0}")]
    MissingElement(String),
    #[error("Element #{0} has the wrong type")]
    WrongElementType(String),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Renderer error: {0}")]
    Renderer(#[from] RendererError),
    #[error("JavaScript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        AppError::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
