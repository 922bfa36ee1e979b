//! Photometric brightness/contrast filtering.
//!
//! Values are percentages of neutral: 100 means no change. Brightness is a
//! straight channel multiplier; contrast scales the distance from mid-gray.
//! Brightness is applied before contrast, matching the CSS filter-list
//! semantics the editing surface previews with.

/// Brightness and contrast settings for one rasterization pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoFilter {
    /// Brightness percentage (100 = unchanged).
    pub brightness: f32,
    /// Contrast percentage (100 = unchanged).
    pub contrast: f32,
}

impl Default for PhotoFilter {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
        }
    }
}

impl PhotoFilter {
    pub fn new(brightness: f32, contrast: f32) -> Self {
        Self {
            brightness,
            contrast,
        }
    }

    /// True when applying the filter would leave every pixel unchanged.
    pub fn is_neutral(&self) -> bool {
        self.brightness == 100.0 && self.contrast == 100.0
    }

    /// Apply the filter to a single RGB pixel.
    #[inline]
    pub fn apply_rgb(&self, pixel: [u8; 3]) -> [u8; 3] {
        if self.is_neutral() {
            return pixel;
        }

        let b = self.brightness / 100.0;
        let c = self.contrast / 100.0;

        let mut result = [0u8; 3];
        for i in 0..3 {
            let v = pixel[i] as f32 / 255.0;
            let v = v * b;
            let v = (v - 0.5) * c + 0.5;
            result[i] = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        result
    }

    /// Apply the filter to a whole RGB buffer in place.
    ///
    /// Used by the rotation fast path, where no resampling happens and the
    /// source buffer is filtered directly.
    pub fn apply_in_place(&self, pixels: &mut [u8]) {
        if self.is_neutral() {
            return;
        }

        for chunk in pixels.chunks_exact_mut(3) {
            let filtered = self.apply_rgb([chunk[0], chunk[1], chunk[2]]);
            chunk.copy_from_slice(&filtered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_identity() {
        let filter = PhotoFilter::default();
        assert!(filter.is_neutral());
        assert_eq!(filter.apply_rgb([0, 128, 255]), [0, 128, 255]);
    }

    #[test]
    fn test_neutral_buffer_unchanged() {
        let filter = PhotoFilter::default();
        let original = vec![10u8, 20, 30, 200, 210, 220];
        let mut pixels = original.clone();
        filter.apply_in_place(&mut pixels);
        assert_eq!(pixels, original);
    }

    #[test]
    fn test_brightness_half() {
        let filter = PhotoFilter::new(50.0, 100.0);
        let result = filter.apply_rgb([200, 100, 0]);
        assert_eq!(result, [100, 50, 0]);
    }

    #[test]
    fn test_brightness_boost_clips_at_white() {
        let filter = PhotoFilter::new(150.0, 100.0);
        let result = filter.apply_rgb([200, 200, 200]);
        assert_eq!(result, [255, 255, 255]);
    }

    #[test]
    fn test_contrast_low_pulls_toward_midgray() {
        let filter = PhotoFilter::new(100.0, 50.0);
        let result = filter.apply_rgb([0, 128, 255]);
        assert!(result[0] > 0, "black should move toward gray");
        assert!((result[1] as i32 - 128).abs() <= 1, "mid stays near middle");
        assert!(result[2] < 255, "white should move toward gray");
    }

    #[test]
    fn test_contrast_high_pushes_from_midgray() {
        let filter = PhotoFilter::new(100.0, 150.0);
        let result = filter.apply_rgb([64, 128, 192]);
        assert!(result[0] < 64, "dark pixel gets darker");
        assert!((result[1] as i32 - 128).abs() <= 1, "mid stays near middle");
        assert!(result[2] > 192, "bright pixel gets brighter");
    }

    #[test]
    fn test_brightness_applied_before_contrast() {
        // 128 at brightness 150 is ~192; contrast 150 then pushes it
        // further from mid-gray. Contrast-first would give a different value.
        let filter = PhotoFilter::new(150.0, 150.0);
        let combined = filter.apply_rgb([128, 128, 128]);

        let brightness_only = PhotoFilter::new(150.0, 100.0).apply_rgb([128, 128, 128]);
        let expected = PhotoFilter::new(100.0, 150.0).apply_rgb(brightness_only);
        assert_eq!(combined, expected);
    }

    #[test]
    fn test_apply_in_place_matches_per_pixel() {
        let filter = PhotoFilter::new(120.0, 80.0);
        let mut buffer = vec![10u8, 60, 110, 160, 210, 255];
        let expected: Vec<u8> = buffer
            .chunks_exact(3)
            .flat_map(|c| filter.apply_rgb([c[0], c[1], c[2]]))
            .collect();
        filter.apply_in_place(&mut buffer);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_incomplete_pixel_ignored() {
        let filter = PhotoFilter::new(50.0, 100.0);
        let mut pixels = vec![200, 200, 200, 64];
        filter.apply_in_place(&mut pixels);
        assert_eq!(pixels[0], 100);
        assert_eq!(pixels[3], 64);
    }
}
