//! Snapcrop WASM - WebAssembly bindings for Snapcrop
//!
//! This crate provides WASM bindings to expose the snapcrop-core
//! functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `session` - The multi-image edit session class
//! - `render` - Standalone render pipeline binding
//! - `types` - WASM-compatible wrapper types for render and export results
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditSession } from '@snapcrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsEditSession();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const id = session.add_image(bytes);
//! session.set_crop_rect(id, 0, 0, 800, 600);
//! const result = session.render_entry(id, true);
//! ```

use wasm_bindgen::prelude::*;

mod render;
mod session;
mod types;

// Re-export public types
pub use render::render_image;
pub use session::JsEditSession;
pub use types::{JsExportBatch, JsRenderedImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
