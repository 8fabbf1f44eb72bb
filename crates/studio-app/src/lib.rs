//! Studio App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer). It picks the
//! storage backend, owns the `StudioContext`, and exposes it to the JS view
//! layer through `StudioHandle`.

mod generator;
mod handle;

pub use handle::StudioHandle;

#[cfg(test)]
mod tests;

use wasm_bindgen::prelude::*;

/// Runs once when the module is instantiated
#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Studio WASM starting...");
}
