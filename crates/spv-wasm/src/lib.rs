//! WebAssembly bindings for SPV header and Merkle proof verification.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Inspecting raw block headers (id, difficulty, signaling, proof of work)
//! - Verifying Merkle inclusion proofs without the full transaction set
//! - Generating proofs when the full list of txids is available

use wasm_bindgen::prelude::*;

pub mod prover;
pub mod state;

// Re-export main types for JS access
pub use prover::BlockProver;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn js_error(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
