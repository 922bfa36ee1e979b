//! Parameter updates as a closed set of variants.
//!
//! Each variant carries exactly the field it mutates, so an invalid field
//! name is unrepresentable and no runtime key validation exists. Values
//! that carry invariants are normalized here, at write time: stored
//! rotation is always in [0, 360) and stored brightness/contrast always in
//! [50, 150], so readers never re-normalize.

use crate::{normalize_degrees, CropOffset, CropRect};
use crate::{MAX_ADJUST_PERCENT, MIN_ADJUST_PERCENT};

use crate::EditParams;

/// One field-level update to an entry's parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditUpdate {
    /// Pan the crop viewport. Stored verbatim.
    SetCropOffset(CropOffset),
    /// Set the viewport zoom. Stored verbatim; the editing surface owns
    /// the lower bound.
    SetZoom(f64),
    /// Set the rotation in degrees. Normalized into [0, 360) on write.
    SetRotation(f64),
    /// Set the brightness percentage. Clamped into [50, 150] on write.
    SetBrightness(f32),
    /// Set the contrast percentage. Clamped into [50, 150] on write.
    SetContrast(f32),
    /// Commit a crop region in working-canvas coordinates.
    SetCropRect(CropRect),
}

impl EditUpdate {
    /// Apply this update to a parameter set.
    pub fn apply_to(self, params: &mut EditParams) {
        match self {
            EditUpdate::SetCropOffset(offset) => params.crop_offset = offset,
            EditUpdate::SetZoom(zoom) => params.zoom = zoom,
            EditUpdate::SetRotation(degrees) => params.rotation = normalize_degrees(degrees),
            EditUpdate::SetBrightness(value) => {
                params.brightness = value.clamp(MIN_ADJUST_PERCENT, MAX_ADJUST_PERCENT)
            }
            EditUpdate::SetContrast(value) => {
                params.contrast = value.clamp(MIN_ADJUST_PERCENT, MAX_ADJUST_PERCENT)
            }
            EditUpdate::SetCropRect(rect) => params.crop_rect = Some(rect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_crop_offset() {
        let mut params = EditParams::default();
        EditUpdate::SetCropOffset(CropOffset::new(-3.5, 12.0)).apply_to(&mut params);
        assert_eq!(params.crop_offset, CropOffset::new(-3.5, 12.0));
    }

    #[test]
    fn test_set_zoom_stored_verbatim() {
        let mut params = EditParams::default();
        EditUpdate::SetZoom(2.75).apply_to(&mut params);
        assert_eq!(params.zoom, 2.75);

        // The store does not enforce the editing surface's lower bound
        EditUpdate::SetZoom(0.5).apply_to(&mut params);
        assert_eq!(params.zoom, 0.5);
    }

    #[test]
    fn test_set_rotation_normalizes_on_write() {
        let mut params = EditParams::default();

        EditUpdate::SetRotation(370.0).apply_to(&mut params);
        assert_eq!(params.rotation, 10.0);

        EditUpdate::SetRotation(-30.0).apply_to(&mut params);
        assert_eq!(params.rotation, 330.0);

        EditUpdate::SetRotation(360.0).apply_to(&mut params);
        assert_eq!(params.rotation, 0.0);
    }

    #[test]
    fn test_set_rotation_in_range_unchanged() {
        let mut params = EditParams::default();
        EditUpdate::SetRotation(45.0).apply_to(&mut params);
        assert_eq!(params.rotation, 45.0);
    }

    #[test]
    fn test_brightness_clamped_on_write() {
        let mut params = EditParams::default();

        EditUpdate::SetBrightness(200.0).apply_to(&mut params);
        assert_eq!(params.brightness, 150.0);

        EditUpdate::SetBrightness(10.0).apply_to(&mut params);
        assert_eq!(params.brightness, 50.0);

        EditUpdate::SetBrightness(120.0).apply_to(&mut params);
        assert_eq!(params.brightness, 120.0);
    }

    #[test]
    fn test_contrast_clamped_on_write() {
        let mut params = EditParams::default();

        EditUpdate::SetContrast(151.0).apply_to(&mut params);
        assert_eq!(params.contrast, 150.0);

        EditUpdate::SetContrast(49.9).apply_to(&mut params);
        assert_eq!(params.contrast, 50.0);
    }

    #[test]
    fn test_set_crop_rect() {
        let mut params = EditParams::default();
        let rect = CropRect::new(1, 2, 3, 4);
        EditUpdate::SetCropRect(rect).apply_to(&mut params);
        assert_eq!(params.crop_rect, Some(rect));
    }

    #[test]
    fn test_updates_leave_other_fields_alone() {
        let mut params = EditParams::default();
        params.zoom = 2.0;
        params.rotation = 90.0;

        EditUpdate::SetBrightness(130.0).apply_to(&mut params);

        assert_eq!(params.zoom, 2.0);
        assert_eq!(params.rotation, 90.0);
        assert_eq!(params.brightness, 130.0);
        assert_eq!(params.contrast, 100.0);
    }
}
