//! WASM-compatible wrapper types for render and export results.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Snapcrop types, handling the conversion between Rust and JavaScript
//! data representations.

use snapcrop_core::{BatchExport, RenderedImage};
use wasm_bindgen::prelude::*;

/// A rendered image wrapper for JavaScript.
///
/// Wraps a finished render: final crop dimensions plus losslessly encoded
/// PNG bytes, ready to hand to a Blob or download link.
///
/// # Memory Management
///
/// The PNG bytes live in WASM memory. `png()` copies them into JavaScript
/// memory as a `Uint8Array`; wasm-bindgen's finalizer releases the WASM
/// side automatically.
#[wasm_bindgen]
pub struct JsRenderedImage {
    width: u32,
    height: u32,
    png: Vec<u8>,
}

#[wasm_bindgen]
impl JsRenderedImage {
    /// Width of the rendered output in pixels (the crop region width).
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the rendered output in pixels (the crop region height).
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the encoded PNG.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.png.len()
    }

    /// Returns the encoded PNG bytes as a Uint8Array.
    ///
    /// Note: this copies the data out of WASM memory.
    pub fn png(&self) -> Vec<u8> {
        self.png.clone()
    }
}

impl JsRenderedImage {
    /// Wrap a core render result. Internal constructor used by the
    /// session and render bindings.
    pub(crate) fn from_rendered(image: RenderedImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            png: image.png,
        }
    }
}

/// Batch export outcome for JavaScript.
///
/// Successes and failures are exposed by index; each accessor returns
/// `None`/`undefined` when the index is out of range. Results pair with
/// their session entry by id, not by position.
#[wasm_bindgen]
pub struct JsExportBatch {
    batch: BatchExport,
}

#[wasm_bindgen]
impl JsExportBatch {
    /// Number of successfully exported images.
    #[wasm_bindgen(getter)]
    pub fn exported_count(&self) -> usize {
        self.batch.exported.len()
    }

    /// Number of entries whose render failed.
    #[wasm_bindgen(getter)]
    pub fn failed_count(&self) -> usize {
        self.batch.failed.len()
    }

    /// True when every invoked render succeeded.
    pub fn is_complete(&self) -> bool {
        self.batch.is_complete()
    }

    /// Entry id of the exported image at `index`.
    pub fn exported_id(&self, index: usize) -> Option<u32> {
        self.batch.exported.get(index).map(|e| e.id.raw())
    }

    /// Suggested file name (`image-{id}.png`) of the exported image at `index`.
    pub fn exported_file_name(&self, index: usize) -> Option<String> {
        self.batch.exported.get(index).map(|e| e.file_name.clone())
    }

    /// PNG bytes of the exported image at `index`.
    pub fn exported_png(&self, index: usize) -> Option<Vec<u8>> {
        self.batch.exported.get(index).map(|e| e.image.png.clone())
    }

    /// Output width of the exported image at `index`.
    pub fn exported_width(&self, index: usize) -> Option<u32> {
        self.batch.exported.get(index).map(|e| e.image.width)
    }

    /// Output height of the exported image at `index`.
    pub fn exported_height(&self, index: usize) -> Option<u32> {
        self.batch.exported.get(index).map(|e| e.image.height)
    }

    /// Entry id of the failure at `index`.
    pub fn failed_id(&self, index: usize) -> Option<u32> {
        self.batch.failed.get(index).map(|f| f.id.raw())
    }

    /// Derived file name of the failure at `index`.
    pub fn failed_file_name(&self, index: usize) -> Option<String> {
        self.batch.failed.get(index).map(|f| f.file_name.clone())
    }

    /// Human-readable error message of the failure at `index`.
    pub fn failed_message(&self, index: usize) -> Option<String> {
        self.batch.failed.get(index).map(|f| f.error.to_string())
    }
}

impl JsExportBatch {
    pub(crate) fn from_batch(batch: BatchExport) -> Self {
        Self { batch }
    }
}
