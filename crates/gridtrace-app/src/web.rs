//! WebAssembly entry point.

use wasm_bindgen::prelude::*;

/// Install the panic hook and the console logger.
///
/// The host page then creates the widget with `new GridTrace(config)`.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Fails only when the host already installed a logger, which keeps working.
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Starting GridTrace (WASM)");
}
