//! Crop extraction from the working canvas.
//!
//! The crop region is expressed in working-canvas pixel coordinates, the
//! space established after rotation. Extraction copies the region into a new
//! raster with the region's top-left at (0, 0).

use crate::decode::DecodedImage;
use crate::CropRect;

/// Extract a rectangular region from a working canvas.
///
/// The output is exactly `rect.width x rect.height` pixels. The caller must
/// guarantee the region is non-empty and lies within the canvas; the render
/// pipeline validates this before any pixel work.
pub fn extract_region(canvas: &DecodedImage, rect: CropRect) -> DecodedImage {
    debug_assert!(!rect.is_empty(), "crop region must be non-empty");
    debug_assert!(
        rect.fits_within(canvas.width, canvas.height),
        "crop region must lie within the canvas"
    );

    // Fast path: full-canvas extraction is a copy
    if rect.x == 0 && rect.y == 0 && rect.width == canvas.width && rect.height == canvas.height {
        return canvas.clone();
    }

    let row_bytes = (rect.width * 3) as usize;
    let mut output = vec![0u8; rect.height as usize * row_bytes];

    // Rows are contiguous in both buffers, so copy row by row
    for y in 0..rect.height {
        let src_y = rect.y + y;
        let src_start = ((src_y * canvas.width + rect.x) * 3) as usize;
        let dst_start = y as usize * row_bytes;

        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&canvas.pixels[src_start..src_start + row_bytes]);
    }

    DecodedImage {
        width: rect.width,
        height: rect.height,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v);
                pixels.push(v);
                pixels.push(v);
            }
        }
        DecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[test]
    fn test_full_extraction_is_identity() {
        let img = test_image(100, 50);
        let result = extract_region(&img, CropRect::new(0, 0, 100, 50));

        assert_eq!(result.width, 100);
        assert_eq!(result.height, 50);
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_extraction_dimensions() {
        let img = test_image(100, 100);
        let result = extract_region(&img, CropRect::new(10, 20, 30, 40));

        assert_eq!(result.width, 30);
        assert_eq!(result.height, 40);
        assert_eq!(result.pixels.len(), 30 * 40 * 3);
    }

    #[test]
    fn test_extraction_maps_top_left_to_origin() {
        let img = test_image(10, 10);
        let result = extract_region(&img, CropRect::new(2, 2, 6, 6));

        // Value at (2, 2) in the source is (2 * 10 + 2) % 256 = 22
        assert_eq!(result.pixels[0], 22);
    }

    #[test]
    fn test_extraction_preserves_pixel_values() {
        let img = test_image(10, 10);
        let result = extract_region(&img, CropRect::new(3, 3, 4, 4));

        // Value at (3, 3) = (3 * 10 + 3) % 256 = 33
        assert_eq!(&result.pixels[0..3], &[33, 33, 33]);
        // Second pixel of the first row comes from (4, 3) = 34
        assert_eq!(&result.pixels[3..6], &[34, 34, 34]);
    }

    #[test]
    fn test_extraction_at_canvas_edge() {
        let img = test_image(10, 10);
        let result = extract_region(&img, CropRect::new(8, 8, 2, 2));

        assert_eq!(result.width, 2);
        assert_eq!(result.height, 2);
        // Bottom-right pixel comes from (9, 9) = 99
        assert_eq!(result.pixels[result.pixels.len() - 1], 99);
    }

    #[test]
    fn test_extraction_single_pixel() {
        let img = test_image(10, 10);
        let result = extract_region(&img, CropRect::new(5, 5, 1, 1));

        assert_eq!(result.width, 1);
        assert_eq!(result.height, 1);
        assert_eq!(result.pixels, vec![55, 55, 55]);
    }

    #[test]
    fn test_extraction_vertical_strip() {
        let img = test_image(200, 100);
        let result = extract_region(&img, CropRect::new(0, 0, 50, 100));

        assert_eq!(result.width, 50);
        assert_eq!(result.height, 100);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
