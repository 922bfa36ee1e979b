//! Raster encoding for the export boundary.
//!
//! Exported images are encoded as PNG. The export contract fixes a single
//! lossless raster encoding; the download collaborator is responsible for
//! turning the bytes into a saved file.
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.

mod png;

pub use png::{encode_png, EncodeError};
