//! Geometric transforms: working-canvas sizing, rotation, crop extraction.
//!
//! The render pipeline applies these in a fixed order, because each step
//! changes the coordinate space the next one operates in:
//! 1. Size the working canvas from the rotation angle
//! 2. Rotate about the source center, filtering drawn pixels in the same pass
//! 3. Extract the crop region from the working canvas
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Crop regions are in working-canvas pixel coordinates
//! - Origin is top-left corner

mod crop;
mod rotation;

pub use crop::extract_region;
pub use rotation::{render_working_canvas, working_canvas_size, InterpolationFilter};
