//! Rotation and flip operations
//!
//! This module provides:
//! - Orthogonal rotations (90/180/270 degrees) by index remapping
//! - Arbitrary angle rotation about the image center
//! - Horizontal and vertical flips
//!
//! Angles are in degrees and positive angles turn the content clockwise on
//! screen (y grows downward).
//!
//! # Rotation Methods
//!
//! - **Sampling**: nearest neighbor. Fast, jagged edges.
//! - **Bilinear**: premultiplied-alpha bilinear interpolation (default).
//!
//! An arbitrary rotation keeps the canvas size: content rotated past the
//! edges is clipped and uncovered corners are transparent (or the fill
//! color, see [`RotateFill`]).

use crate::interp::{self, Edge};
use crate::{TransformError, TransformResult};
use log::trace;
use rasterkit_core::color::{self, CLEAR_BLACK};
use rasterkit_core::{Raster, RasterImage, RasterImageMut};

/// Rotation algorithm to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateMethod {
    /// Sampling (nearest-neighbor) - fastest, lowest quality
    Sampling,
    /// Bilinear interpolation on premultiplied alpha
    #[default]
    Bilinear,
}

/// Background for the canvas area not covered by the rotated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateFill {
    /// Fully transparent black
    #[default]
    Transparent,
    /// Opaque white
    White,
    /// Opaque black
    Black,
    /// A packed `0xRRGGBBAA` color
    Color(u32),
}

impl RotateFill {
    /// Get the packed fill color
    pub fn to_value(self) -> u32 {
        match self {
            RotateFill::Transparent => CLEAR_BLACK,
            RotateFill::White => color::WHITE,
            RotateFill::Black => color::BLACK,
            RotateFill::Color(val) => val,
        }
    }
}

/// Options for rotation operations
#[derive(Debug, Clone, Default)]
pub struct RotateOptions {
    /// Rotation algorithm to use
    pub method: RotateMethod,
    /// Background fill color
    pub fill: RotateFill,
}

impl RotateOptions {
    /// Create options with a specific method
    pub fn with_method(method: RotateMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Create options with a specific fill color
    pub fn with_fill(fill: RotateFill) -> Self {
        Self {
            fill,
            ..Default::default()
        }
    }

    /// Set the rotation method
    pub fn method(mut self, method: RotateMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the fill color
    pub fn fill(mut self, fill: RotateFill) -> Self {
        self.fill = fill;
        self
    }
}

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if a >= 360.0 { 0.0 } else { a }
}

/// Number of clockwise quarter turns if `angle` (normalized) is an exact
/// multiple of 90 degrees.
fn exact_quarters(angle: f32) -> Option<u32> {
    let q = angle / 90.0;
    (q.fract() == 0.0).then_some(q as u32 % 4)
}

/// Rotate an image by 90-degree increments
///
/// # Arguments
/// * `image` - Input image
/// * `quads` - Number of 90-degree clockwise rotations (taken modulo 4)
pub fn rotate_orth(image: &RasterImage, quads: u32) -> TransformResult<RasterImage> {
    match quads % 4 {
        0 => Ok(image.duplicate()),
        1 => rotate_90(image, true),
        2 => rotate_180(image),
        _ => rotate_90(image, false),
    }
}

/// Rotate an image 90 degrees; width and height swap.
///
/// # Arguments
/// * `image` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(image: &RasterImage, clockwise: bool) -> TransformResult<RasterImage> {
    let quarters = if clockwise { 1 } else { 3 };
    Ok(RasterImage::from_raster(
        &image.as_raster().rotate_quarters(quarters),
    ))
}

/// Rotate an image 180 degrees
pub fn rotate_180(image: &RasterImage) -> TransformResult<RasterImage> {
    // 180 rotation = horizontal flip + vertical flip
    let flipped_h = flip_lr(image)?;
    flip_tb(&flipped_h)
}

/// Flip an image left-right (horizontal mirror)
pub fn flip_lr(image: &RasterImage) -> TransformResult<RasterImage> {
    let mut out = image.to_mut();
    for y in 0..out.height() {
        out.row_data_mut(y).reverse();
    }
    Ok(out.into())
}

/// Flip an image top-bottom (vertical mirror)
pub fn flip_tb(image: &RasterImage) -> TransformResult<RasterImage> {
    let mut out = RasterImageMut::new(image.width(), image.height())?;
    let h = image.height();
    for y in 0..h {
        out.row_data_mut(h - 1 - y)
            .copy_from_slice(image.row_data(y));
    }
    Ok(out.into())
}

/// Rotate an image by an arbitrary angle in degrees with default options
/// (bilinear, transparent background).
///
/// # Example
/// ```
/// use rasterkit_core::RasterImage;
/// use rasterkit_transform::rotate;
///
/// let img = RasterImage::new(40, 30).unwrap();
/// let rotated = rotate(&img, 45.0).unwrap();
/// assert_eq!(rotated.size(), (40, 30));
/// ```
pub fn rotate(image: &RasterImage, angle: f32) -> TransformResult<RasterImage> {
    rotate_with_options(image, angle, &RotateOptions::default())
}

/// Rotate an image clockwise by `angle` degrees about its center.
///
/// The angle is normalized into `[0, 360)`. A zero angle returns a
/// duplicate. Exactly 180 degrees, and 90 or 270 degrees on a square
/// image, take the lossless quarter-turn path. Everything else is
/// resampled onto a canvas of the original size.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `angle` is NaN or
/// infinite.
pub fn rotate_with_options(
    image: &RasterImage,
    angle: f32,
    options: &RotateOptions,
) -> TransformResult<RasterImage> {
    check_angle(angle)?;
    let angle = normalize_angle(angle);
    let square = image.width() == image.height();
    match exact_quarters(angle) {
        Some(0) => {
            trace!("rotate {angle}: identity");
            return Ok(image.duplicate());
        }
        Some(q) if q == 2 || square => {
            trace!("rotate {angle}: {q} quarter turns");
            return rotate_orth(image, q);
        }
        _ => {}
    }

    trace!(
        "rotate {angle}: {:?} resampling on {}x{}",
        options.method,
        image.width(),
        image.height()
    );
    let fill = options.fill.to_value();
    let mut out = RasterImageMut::new(image.width(), image.height())?;

    let (sin_a, cos_a) = angle.to_radians().sin_cos();
    let cx = image.width() as f32 / 2.0;
    let cy = image.height() as f32 / 2.0;

    for dy in 0..out.height() {
        for dx in 0..out.width() {
            // destination pixel center, relative to the rotation center
            let x_rel = dx as f32 + 0.5 - cx;
            let y_rel = dy as f32 + 0.5 - cy;

            // inverse of the clockwise rotation, back to pixel-index space
            let sx = x_rel * cos_a + y_rel * sin_a + cx - 0.5;
            let sy = -x_rel * sin_a + y_rel * cos_a + cy - 0.5;

            let sample = match options.method {
                RotateMethod::Bilinear => interp::bilinear(image, sx, sy, Edge::Transparent),
                RotateMethod::Sampling => sample_nearest(image, sx, sy),
            };
            out.set_pixel_unchecked(dx, dy, color::blend_over(sample, fill));
        }
    }

    Ok(out.into())
}

fn check_angle(angle: f32) -> TransformResult<()> {
    if !angle.is_finite() {
        return Err(TransformError::InvalidParameters(format!(
            "rotation angle {angle}"
        )));
    }
    Ok(())
}

fn sample_nearest(image: &RasterImage, sx: f32, sy: f32) -> u32 {
    let x = sx.round();
    let y = sy.round();
    if x < 0.0 || y < 0.0 || x >= image.width() as f32 || y >= image.height() as f32 {
        return CLEAR_BLACK;
    }
    image.get_pixel_unchecked(x as u32, y as u32)
}

/// Rotate a raster clockwise by `angle` degrees.
///
/// Multiples of 90 degrees remap indices exactly (a quarter turn swaps
/// width and height). Any other angle renders the raster through
/// [`rotate`] and keeps its size.
pub fn rotate_raster(raster: &Raster, angle: f32) -> TransformResult<Raster> {
    check_angle(angle)?;
    let angle = normalize_angle(angle);
    if let Some(q) = exact_quarters(angle) {
        return Ok(raster.rotate_quarters(q));
    }
    let rendered = rotate(&RasterImage::from_raster(raster), angle)?;
    Ok(rendered.as_raster())
}
