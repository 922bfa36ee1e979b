//! Snapcrop Core - Multi-image crop editing library
//!
//! This crate provides the core editing functionality for Snapcrop,
//! including image decoding, the crop/rotate/filter render pipeline,
//! PNG export, and the multi-image edit session.

pub mod decode;
pub mod encode;
pub mod filter;
pub mod render;
pub mod session;
pub mod transform;

pub use filter::PhotoFilter;
pub use render::{render, RenderError, RenderedImage};
pub use session::{
    BatchExport, EditSession, EditUpdate, EntryId, ExportFailure, ExportedImage, ImageEntry,
    SessionError, SessionStore,
};
pub use transform::{
    extract_region, render_working_canvas, working_canvas_size, InterpolationFilter,
};

/// Lowest accepted brightness/contrast percentage.
pub const MIN_ADJUST_PERCENT: f32 = 50.0;
/// Highest accepted brightness/contrast percentage.
pub const MAX_ADJUST_PERCENT: f32 = 150.0;

/// Normalize an angle in degrees to the range [0, 360).
///
/// Angles outside the range wrap around: 370 becomes 10, -30 becomes 330,
/// and 360 becomes 0.
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Crop viewport pan offset in editor coordinates.
///
/// Records where the editing surface has panned the image under the crop
/// window. Values may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropOffset {
    pub x: f64,
    pub y: f64,
}

impl CropOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Crop region in working-canvas pixel coordinates.
///
/// `(x, y)` is the top-left corner of the region; the origin is the
/// top-left corner of the working canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The exclusive right edge of the region.
    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// The exclusive bottom edge of the region.
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// A region with zero width or height selects no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check that the region lies entirely within a canvas of the given size.
    pub fn fits_within(&self, canvas_width: u32, canvas_height: u32) -> bool {
        self.right() <= canvas_width as u64 && self.bottom() <= canvas_height as u64
    }
}

/// Per-image edit parameters.
///
/// Every image in a session carries its own parameter set. The session
/// store keeps `rotation` normalized to [0, 360) and `brightness` /
/// `contrast` clamped to the accepted percentage range; see
/// [`session::EditUpdate`] for the write path.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditParams {
    /// Crop viewport pan offset in editor coordinates.
    pub crop_offset: CropOffset,
    /// Viewport zoom factor (1.0 = fit). The editing surface enforces its
    /// own lower bound; the store records the value as given.
    pub zoom: f64,
    /// Rotation in degrees, in [0, 360).
    pub rotation: f64,
    /// Brightness percentage (50 to 150, 100 = neutral).
    pub brightness: f32,
    /// Contrast percentage (50 to 150, 100 = neutral).
    pub contrast: f32,
    /// Committed crop region in working-canvas pixels. `None` until the
    /// editing surface commits a selection.
    pub crop_rect: Option<CropRect>,
}

impl Default for EditParams {
    fn default() -> Self {
        Self {
            crop_offset: CropOffset::default(),
            zoom: 1.0,
            rotation: 0.0,
            brightness: 100.0,
            contrast: 100.0,
            crop_rect: None,
        }
    }
}

impl EditParams {
    /// Create a new parameter set with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults.
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    /// The photometric filter described by the brightness/contrast fields.
    pub fn photo_filter(&self) -> PhotoFilter {
        PhotoFilter::new(self.brightness, self.contrast)
    }
}
