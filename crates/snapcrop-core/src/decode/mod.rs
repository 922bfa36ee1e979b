//! Image decoding for the ingestion boundary.
//!
//! The camera and gallery collaborators hand over raw JPEG or PNG bytes;
//! this module turns them into RGB pixel data with EXIF orientation applied,
//! ready for the transform pipeline.
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.

mod image;
mod types;

pub use image::decode_image;
pub use types::{DecodeError, DecodedImage, Orientation};
