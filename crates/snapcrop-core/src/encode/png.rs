//! PNG encoding for export.
//!
//! The export contract produces a lossless raster, so PNG is used and there
//! is no quality knob. Encoding failures never abort a batch export; the
//! orchestration layer contains them to the affected entry.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length
    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=50, 1u32..=50)
    }

    proptest! {
        /// Property: valid input always produces bytes with the PNG signature.
        #[test]
        fn prop_valid_input_produces_valid_png(
            (width, height) in dimensions_strategy(),
        ) {
            let size = (width as usize) * (height as usize) * 3;
            let pixels = vec![128u8; size];

            let result = encode_png(&pixels, width, height);
            prop_assert!(result.is_ok(), "Valid input should produce valid output");

            let png_bytes = result.unwrap();
            prop_assert_eq!(
                &png_bytes[0..8],
                &[0x89u8, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
                "Should have PNG signature"
            );
        }

        /// Property: encoding is lossless for arbitrary pixel data.
        #[test]
        fn prop_lossless_round_trip(
            (width, height) in (1u32..=16, 1u32..=16),
            seed in any::<u8>(),
        ) {
            let size = (width as usize) * (height as usize) * 3;
            let pixels: Vec<u8> = (0..size)
                .map(|i| ((i as u32 * 37 + seed as u32) % 256) as u8)
                .collect();

            let png = encode_png(&pixels, width, height).unwrap();
            let decoded = image::load_from_memory(&png).unwrap().into_rgb8();

            prop_assert_eq!(decoded.dimensions(), (width, height));
            prop_assert_eq!(decoded.into_raw(), pixels);
        }

        /// Property: same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
        ) {
            let size = (width as usize) * (height as usize) * 3;
            let pixels = vec![100u8; size];

            let result1 = encode_png(&pixels, width, height);
            let result2 = encode_png(&pixels, width, height);

            prop_assert!(result1.is_ok() && result2.is_ok());
            prop_assert_eq!(result1.unwrap(), result2.unwrap());
        }

        /// Property: invalid pixel data length always returns error.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            (width, height) in dimensions_strategy(),
            extra_or_missing in -10i32..=10,
        ) {
            prop_assume!(extra_or_missing != 0);

            let expected_size = (width as usize) * (height as usize) * 3;
            let actual_size = if extra_or_missing > 0 {
                expected_size + extra_or_missing as usize
            } else {
                expected_size.saturating_sub((-extra_or_missing) as usize)
            };
            prop_assume!(actual_size != expected_size);

            let pixels = vec![128u8; actual_size];
            let result = encode_png(&pixels, width, height);

            prop_assert!(
                matches!(result, Err(EncodeError::InvalidPixelData { .. })),
                "Mismatched pixel data should return InvalidPixelData error"
            );
        }

        /// Property: zero dimensions always return error.
        #[test]
        fn prop_zero_dimensions_return_error(
            width in 0u32..=1,
            height in 0u32..=1,
        ) {
            prop_assume!(width == 0 || height == 0);

            let pixels = vec![];
            let result = encode_png(&pixels, width, height);

            prop_assert!(
                matches!(result, Err(EncodeError::InvalidDimensions { .. })),
                "Zero dimensions should return InvalidDimensions error"
            );
        }
    }
}
