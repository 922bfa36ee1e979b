//! WASM bindings for the multi-image edit session.
//!
//! This module exposes the core `EditSession` as a JavaScript class. The
//! embedding application constructs exactly one session and routes every
//! edit through it; ids returned from `add_image`/`add_images` are the
//! handles for all later calls.

use js_sys::{Array, Uint8Array};
use snapcrop_core::{EditSession, EditUpdate, EntryId};
use snapcrop_core::{CropOffset, CropRect, InterpolationFilter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::types::{JsExportBatch, JsRenderedImage};

fn filter_from_flag(use_lanczos: bool) -> InterpolationFilter {
    if use_lanczos {
        InterpolationFilter::Lanczos3
    } else {
        InterpolationFilter::Bilinear
    }
}

/// A multi-image edit session for JavaScript.
///
/// Wraps the core session: an ordered collection of images, each with its
/// own edit parameters, plus the single active-entry pointer. All methods
/// are synchronous; callers that want parallel exports run multiple
/// instances in workers and pair results by id.
#[wasm_bindgen]
pub struct JsEditSession {
    session: EditSession,
}

impl Default for JsEditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsEditSession {
    /// Create an empty session.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsEditSession {
        JsEditSession {
            session: EditSession::new(),
        }
    }

    /// Add one source image. Returns its id; the new entry becomes active.
    pub fn add_image(&mut self, bytes: &[u8]) -> u32 {
        let ids = self.session.ingest(vec![bytes.to_vec()]);
        // ingest of one source always yields one id
        ids[0].raw()
    }

    /// Add several source images at once.
    ///
    /// `sources` must be an Array of Uint8Array elements. Returns the new
    /// ids in order; the first new entry becomes active.
    pub fn add_images(&mut self, sources: Array) -> Result<Vec<u32>, JsValue> {
        let mut bytes = Vec::with_capacity(sources.length() as usize);
        for value in sources.iter() {
            let buffer = value
                .dyn_into::<Uint8Array>()
                .map_err(|_| JsValue::from_str("Expected an Array of Uint8Array elements"))?;
            bytes.push(buffer.to_vec());
        }
        let ids = self.session.ingest(bytes);
        Ok(ids.iter().map(|id| id.raw()).collect())
    }

    /// Remove an image by id. The active pointer moves to the first
    /// remaining entry, or clears when the session empties.
    pub fn remove_image(&mut self, id: u32) -> Result<(), JsValue> {
        self.session
            .remove(EntryId::new(id))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        web_sys::console::log_1(&format!("Removed image {}", id).into());
        Ok(())
    }

    /// Make the entry with the given id active.
    pub fn set_active(&mut self, id: u32) -> Result<(), JsValue> {
        self.session
            .set_active(EntryId::new(id))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The currently active entry id, or `undefined` when the session is
    /// empty.
    pub fn active_id(&self) -> Option<u32> {
        self.session.active().map(EntryId::raw)
    }

    /// Number of images in the session.
    pub fn count(&self) -> usize {
        self.session.len()
    }

    /// All entry ids in insertion order.
    pub fn entry_ids(&self) -> Vec<u32> {
        self.session.list().iter().map(|e| e.id.raw()).collect()
    }

    /// The edit parameters of one entry, as a plain JavaScript object
    /// (camelCase keys).
    pub fn params(&self, id: u32) -> Result<JsValue, JsValue> {
        let entry = self
            .session
            .entry(EntryId::new(id))
            .ok_or_else(|| JsValue::from_str(&format!("No image with id {} exists", id)))?;
        serde_wasm_bindgen::to_value(&entry.params).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the crop viewport pan offset of an entry.
    pub fn set_crop_offset(&mut self, id: u32, x: f64, y: f64) -> Result<(), JsValue> {
        self.apply(id, EditUpdate::SetCropOffset(CropOffset::new(x, y)))
    }

    /// Set the viewport zoom of an entry.
    pub fn set_zoom(&mut self, id: u32, zoom: f64) -> Result<(), JsValue> {
        self.apply(id, EditUpdate::SetZoom(zoom))
    }

    /// Set the rotation of an entry, in degrees. Stored normalized to
    /// [0, 360).
    pub fn set_rotation(&mut self, id: u32, degrees: f64) -> Result<(), JsValue> {
        self.apply(id, EditUpdate::SetRotation(degrees))
    }

    /// Set the brightness percentage of an entry. Stored clamped to
    /// [50, 150].
    pub fn set_brightness(&mut self, id: u32, value: f32) -> Result<(), JsValue> {
        self.apply(id, EditUpdate::SetBrightness(value))
    }

    /// Set the contrast percentage of an entry. Stored clamped to
    /// [50, 150].
    pub fn set_contrast(&mut self, id: u32, value: f32) -> Result<(), JsValue> {
        self.apply(id, EditUpdate::SetContrast(value))
    }

    /// Commit a crop region for an entry, in working-canvas pixels.
    pub fn set_crop_rect(
        &mut self,
        id: u32,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<(), JsValue> {
        self.apply(id, EditUpdate::SetCropRect(CropRect::new(x, y, width, height)))
    }

    /// Remove every image and reset the active pointer.
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Render one entry through the full pipeline (decode, rotate, filter,
    /// crop, PNG encode).
    ///
    /// # Arguments
    ///
    /// * `id` - Entry to render
    /// * `use_lanczos` - High-quality Lanczos3 resampling (slower),
    ///   otherwise bilinear
    pub fn render_entry(&self, id: u32, use_lanczos: bool) -> Result<JsRenderedImage, JsValue> {
        let exported = self
            .session
            .export_entry(EntryId::new(id), filter_from_flag(use_lanczos))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsRenderedImage::from_rendered(exported.image))
    }

    /// Render every entry with a committed crop region.
    ///
    /// Entries without a crop region are skipped; per-entry failures are
    /// reported in the returned batch and never abort the rest.
    pub fn export_all(&self, use_lanczos: bool) -> JsExportBatch {
        JsExportBatch::from_batch(self.session.export_all(filter_from_flag(use_lanczos)))
    }
}

impl JsEditSession {
    fn apply(&mut self, id: u32, update: EditUpdate) -> Result<(), JsValue> {
        self.session
            .update(EntryId::new(id), update)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
