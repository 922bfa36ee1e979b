//! Rotation onto an expanded working canvas, fused with photometric filtering.
//!
//! Rotation uses inverse mapping: for each pixel of the working canvas we
//! compute which source location lands there and interpolate its value. The
//! brightness/contrast filter runs on each sampled pixel inside the same
//! loop, so filtering and rotation happen in one rasterization pass and the
//! black canvas background is never filtered.
//!
//! For rotation by angle θ, with pixel-center coordinates on both sides,
//! the inverse transform is:
//! ```text
//! src_x = (dst_x + 0.5 - cx) * cos(-θ) - (dst_y + 0.5 - cy) * sin(-θ) + src_cx - 0.5
//! src_y = (dst_x + 0.5 - cx) * sin(-θ) + (dst_y + 0.5 - cy) * cos(-θ) + src_cy - 0.5
//! ```

use crate::decode::DecodedImage;
use crate::filter::PhotoFilter;

/// Interpolation filter for rotation sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationFilter {
    /// Fast bilinear interpolation - good for preview rendering.
    #[default]
    Bilinear,
    /// High-quality Lanczos3 interpolation - good for export.
    Lanczos3,
}

/// Compute the working-canvas dimensions for a rotated source image.
///
/// The working canvas is the minimal axis-aligned bounding box that contains
/// the source rotated about its own center, so rotation never clips:
///
/// ```text
/// canvas_w = |w*cos| + |h*sin|
/// canvas_h = |w*sin| + |h*cos|
/// ```
///
/// Exact angles (0/90/180/270 and their multiples) take a fast path with no
/// floating rounding, so a 90-degree rotation swaps dimensions exactly.
pub fn working_canvas_size(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    // Handle 360, 720, negative angles etc.
    let angle_normalized = angle_degrees % 360.0;
    let abs_angle = angle_normalized.abs();

    // Fast path: no rotation (including near-zero and multiples of 360)
    if abs_angle < 0.001 || (360.0 - abs_angle) < 0.001 {
        return (width, height);
    }

    // Fast path: exact 90/270 degree rotations (swap dimensions)
    if (abs_angle - 90.0).abs() < 0.001 || (abs_angle - 270.0).abs() < 0.001 {
        return (height, width);
    }

    // Fast path: exact 180 degree rotation (same dimensions)
    if (abs_angle - 180.0).abs() < 0.001 {
        return (width, height);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    let canvas_w = (w * cos + h * sin).round() as u32;
    let canvas_h = (w * sin + h * cos).round() as u32;

    (canvas_w.max(1), canvas_h.max(1))
}

/// Rotate a source image onto its working canvas, filtering as it draws.
///
/// The source appears rotated and centered within the canvas returned by
/// [`working_canvas_size`]. Canvas pixels whose inverse mapping falls outside
/// the source stay black; the photometric filter applies only to drawn
/// source pixels.
///
/// Fast path: rotation of (effectively) zero skips resampling and applies
/// the filter directly to a copy of the source buffer.
pub fn render_working_canvas(
    image: &DecodedImage,
    angle_degrees: f64,
    filter: InterpolationFilter,
    photo: &PhotoFilter,
) -> DecodedImage {
    // Fast path: no rotation, filter the buffer directly
    if angle_degrees.abs() < 0.001 {
        let mut output = image.clone();
        photo.apply_in_place(&mut output.pixels);
        return output;
    }

    let (src_w, src_h) = (image.width as f64, image.height as f64);
    let (dst_w, dst_h) = working_canvas_size(image.width, image.height, angle_degrees);

    // Negate so a positive angle rotates counter-clockwise visually
    let angle_rad = -angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = vec![0u8; (dst_w * dst_h * 3) as usize];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Map through pixel centers, then shift back to pixel-center
            // coordinates for sampling. Without the half-pixel offset the
            // mapping lands a full pixel off at right angles and drops
            // border rows/columns of the source.
            let dx = dst_x as f64 + 0.5 - dst_cx;
            let dy = dst_y as f64 + 0.5 - dst_cy;

            let src_x = dx * cos - dy * sin + src_cx - 0.5;
            let src_y = dx * sin + dy * cos + src_cy - 0.5;

            let sample = match filter {
                InterpolationFilter::Bilinear => sample_bilinear(image, src_x, src_y),
                InterpolationFilter::Lanczos3 => sample_lanczos3(image, src_x, src_y),
            };

            // Out-of-source pixels stay black and unfiltered
            if let Some(pixel) = sample {
                let pixel = photo.apply_rgb(pixel);
                let dst_idx = ((dst_y * dst_w + dst_x) * 3) as usize;
                output[dst_idx] = pixel[0];
                output[dst_idx + 1] = pixel[1];
                output[dst_idx + 2] = pixel[2];
            }
        }
    }

    DecodedImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    }
}

#[inline]
fn get_pixel_f64(image: &DecodedImage, px: usize, py: usize) -> [f64; 3] {
    let idx = (py * image.width as usize + px) * 3;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel with bilinear interpolation, or `None` outside the source.
///
/// Coordinates are in pixel centers, so the source covers
/// `[-0.5, w - 0.5) x [-0.5, h - 0.5)`. Neighborhoods that straddle the
/// border are clamped to it (border replication), so the outermost source
/// rows and columns stay sampleable.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> Option<[u8; 3]> {
    let (w, h) = (image.width as i64, image.height as i64);

    if x < -0.5 || x >= w as f64 - 0.5 || y < -0.5 || y >= h as f64 - 0.5 {
        return None;
    }

    let x0i = x.floor() as i64;
    let y0i = y.floor() as i64;

    let fx = x - x0i as f64;
    let fy = y - y0i as f64;

    let x0 = x0i.clamp(0, w - 1) as usize;
    let y0 = y0i.clamp(0, h - 1) as usize;
    let x1 = (x0i + 1).clamp(0, w - 1) as usize;
    let y1 = (y0i + 1).clamp(0, h - 1) as usize;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x1, y0);
    let p01 = get_pixel_f64(image, x0, y1);
    let p11 = get_pixel_f64(image, x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    Some(result)
}

/// Sample a pixel with Lanczos3 interpolation over a 6x6 neighborhood.
///
/// Falls back to bilinear near the source edges where the full kernel does
/// not fit.
fn sample_lanczos3(image: &DecodedImage, x: f64, y: f64) -> Option<[u8; 3]> {
    let (w, h) = (image.width as i64, image.height as i64);

    if x < 2.0 || x >= (w - 3) as f64 || y < 2.0 || y >= (h - 3) as f64 {
        return sample_bilinear(image, x, y);
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut sum = [0.0f64; 3];
    let mut weight_sum = 0.0;

    for ky in -2..=3 {
        for kx in -2..=3 {
            let px = x0 + kx;
            let py = y0 + ky;

            if px >= 0 && px < w && py >= 0 && py < h {
                let dx = x - px as f64;
                let dy = y - py as f64;
                let weight = lanczos_weight(dx, 3.0) * lanczos_weight(dy, 3.0);

                let pixel = get_pixel_f64(image, px as usize, py as usize);
                sum[0] += pixel[0] * weight;
                sum[1] += pixel[1] * weight;
                sum[2] += pixel[2] * weight;
                weight_sum += weight;
            }
        }
    }

    let mut result = [0u8; 3];
    if weight_sum > 0.0 {
        for i in 0..3 {
            result[i] = (sum[i] / weight_sum).clamp(0.0, 255.0).round() as u8;
        }
    }

    Some(result)
}

/// Lanczos kernel weight: `L(x) = sinc(x) * sinc(x/a)` for `|x| < a`.
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;

    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the working canvas never clips the source; each
        /// dimension covers the source extent projected onto it.
        #[test]
        fn prop_canvas_never_clips(
            width in 1u32..=200,
            height in 1u32..=200,
            angle in 0.0f64..360.0,
        ) {
            let (w, h) = working_canvas_size(width, height, angle);
            let r = angle.to_radians();
            let expected_w = width as f64 * r.cos().abs() + height as f64 * r.sin().abs();
            let expected_h = width as f64 * r.sin().abs() + height as f64 * r.cos().abs();

            // Within rounding of the bounding-box law, and never zero
            prop_assert!(w as f64 >= expected_w.floor() - 1.0);
            prop_assert!(h as f64 >= expected_h.floor() - 1.0);
            prop_assert!(w >= 1 && h >= 1);
        }

        /// Property: opposite angles produce the same canvas.
        #[test]
        fn prop_canvas_symmetric_in_angle(
            width in 1u32..=200,
            height in 1u32..=200,
            angle in 0.0f64..180.0,
        ) {
            prop_assert_eq!(
                working_canvas_size(width, height, angle),
                working_canvas_size(width, height, -angle)
            );
        }

        /// Property: rendered canvas dimensions match the sizing law.
        #[test]
        fn prop_render_matches_canvas_size(
            width in 2u32..=30,
            height in 2u32..=30,
            angle in 1.0f64..359.0,
        ) {
            let pixels = vec![100u8; (width * height * 3) as usize];
            let img = DecodedImage { width, height, pixels };
            let result = render_working_canvas(
                &img,
                angle,
                InterpolationFilter::Bilinear,
                &PhotoFilter::default(),
            );

            let (w, h) = working_canvas_size(width, height, angle);
            prop_assert_eq!(result.width, w);
            prop_assert_eq!(result.height, h);
            prop_assert_eq!(result.pixels.len(), (w * h * 3) as usize);
        }
    }
}
