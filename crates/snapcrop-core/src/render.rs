//! The transform engine: one source image plus one parameter set in, one
//! final PNG raster out.
//!
//! The pipeline order is fixed because each step changes the coordinate
//! space the next one operates in:
//! 1. Decode the source (EXIF-corrected)
//! 2. Size the working canvas from the rotation angle
//! 3. Validate the crop region against the canvas
//! 4. Rotate about the center, filtering drawn pixels in the same pass
//! 5. Extract the crop region
//! 6. Encode the result as PNG
//!
//! The engine is a pure function: it holds no state between calls, and the
//! same inputs always produce the same raster.

use thiserror::Error;

use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_png, EncodeError};
use crate::transform::{
    extract_region, render_working_canvas, working_canvas_size, InterpolationFilter,
};
use crate::{CropRect, EditParams};

/// Errors produced by a single render.
///
/// Every variant is scoped to the entry being rendered; the batch export
/// layer reports these per entry and keeps going.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The entry has no committed crop region, so there is nothing to export.
    #[error("No crop region has been set for this image")]
    MissingCropRegion,

    /// The crop region is empty or extends beyond the working canvas.
    #[error(
        "Crop region {rect:?} is invalid for a {canvas_width}x{canvas_height} working canvas"
    )]
    InvalidCropRegion {
        rect: CropRect,
        canvas_width: u32,
        canvas_height: u32,
    },

    /// The source bytes could not be decoded into pixel data.
    #[error("Failed to decode source image: {0}")]
    Decode(#[from] DecodeError),

    /// The output raster could not be encoded.
    #[error("Failed to encode output image: {0}")]
    Encode(#[from] EncodeError),
}

/// A rendered export raster.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    /// Output width in pixels (equals the crop region width).
    pub width: u32,
    /// Output height in pixels (equals the crop region height).
    pub height: u32,
    /// PNG-encoded bytes.
    pub png: Vec<u8>,
}

/// Render one source image with one parameter set to a final PNG raster.
///
/// The crop region must be set, non-empty, and lie within the working
/// canvas implied by the source dimensions and rotation; validation happens
/// before any pixel work. Rotation is accepted at any finite angle - the
/// trigonometry is periodic - though the session store only ever hands over
/// normalized values.
pub fn render(
    source: &[u8],
    params: &EditParams,
    filter: InterpolationFilter,
) -> Result<RenderedImage, RenderError> {
    let rect = params.crop_rect.ok_or(RenderError::MissingCropRegion)?;

    let image = decode_image(source)?;

    let (canvas_width, canvas_height) =
        working_canvas_size(image.width, image.height, params.rotation);

    if rect.is_empty() || !rect.fits_within(canvas_width, canvas_height) {
        return Err(RenderError::InvalidCropRegion {
            rect,
            canvas_width,
            canvas_height,
        });
    }

    let canvas = render_working_canvas(&image, params.rotation, filter, &params.photo_filter());
    let output = extract_region(&canvas, rect);
    let png = encode_png(&output.pixels, output.width, output.height)?;

    Ok(RenderedImage {
        width: output.width,
        height: output.height,
        png,
    })
}
