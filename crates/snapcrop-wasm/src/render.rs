//! WASM binding for the standalone render pipeline.
//!
//! For callers that manage their own image state and only need the
//! transform engine: source bytes plus a parameter object in, finished
//! PNG out. Stateful callers use `JsEditSession` instead.

use snapcrop_core::{render, EditParams, InterpolationFilter};
use wasm_bindgen::prelude::*;

use crate::types::JsRenderedImage;

/// Render source image bytes through the full pipeline.
///
/// Decodes the source (with EXIF orientation correction), rotates it onto
/// an expanded working canvas, applies brightness/contrast, extracts the
/// crop region, and encodes the result as a lossless PNG.
///
/// # Arguments
///
/// * `bytes` - Original encoded image bytes (JPEG or PNG)
/// * `params` - Edit parameters as a plain object with camelCase keys
///   (`rotation`, `brightness`, `contrast`, `cropRect: {x, y, width,
///   height}`, ...); missing fields take their defaults
/// * `use_lanczos` - High-quality Lanczos3 resampling (slower), otherwise
///   bilinear
///
/// # Example (TypeScript)
///
/// ```typescript
/// const result = render_image(bytes, {
///   rotation: 90,
///   brightness: 110,
///   cropRect: { x: 0, y: 0, width: 800, height: 600 },
/// }, true);
/// download(result.png(), 'image.png');
/// ```
#[wasm_bindgen]
pub fn render_image(
    bytes: &[u8],
    params: JsValue,
    use_lanczos: bool,
) -> Result<JsRenderedImage, JsValue> {
    let params: EditParams = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid edit parameters: {}", e)))?;
    let filter = if use_lanczos {
        InterpolationFilter::Lanczos3
    } else {
        InterpolationFilter::Bilinear
    };

    let rendered =
        render(bytes, &params, filter).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsRenderedImage::from_rendered(rendered))
}
