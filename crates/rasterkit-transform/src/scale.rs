//! Image scaling operations
//!
//! Provides three resampling algorithms:
//! - Sampling (nearest neighbor)
//! - Linear interpolation (for upscaling)
//! - Area mapping (for downscaling, every source pixel contributes in
//!   proportion to its coverage)
//!
//! Both interpolating methods work on premultiplied alpha.

use crate::interp::{self, Accum, Edge};
use crate::{TransformError, TransformResult};
use rasterkit_core::{RasterImage, RasterImageMut};

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, pixelated results)
    Sampling,
    /// Bilinear interpolation (good for upscaling)
    Linear,
    /// Area mapping (best for downscaling, anti-aliased)
    AreaMap,
    /// Area mapping when shrinking on both axes, linear otherwise
    #[default]
    Auto,
}

impl ScaleMethod {
    fn resolve(self, src: (u32, u32), dst: (u32, u32)) -> ScaleMethod {
        match self {
            ScaleMethod::Auto if dst.0 <= src.0 && dst.1 <= src.1 => ScaleMethod::AreaMap,
            ScaleMethod::Auto => ScaleMethod::Linear,
            m => m,
        }
    }
}

/// Resize to exactly `width x height` with [`ScaleMethod::Auto`].
///
/// The aspect ratio is not preserved. Resizing to the current size returns
/// a duplicate.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if either target
/// dimension is 0.
pub fn resize_to(image: &RasterImage, width: u32, height: u32) -> TransformResult<RasterImage> {
    scale_to_size(image, width, height, ScaleMethod::Auto)
}

/// Resize to exactly `width x height` with the given method.
pub fn scale_to_size(
    image: &RasterImage,
    width: u32,
    height: u32,
    method: ScaleMethod,
) -> TransformResult<RasterImage> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidScaleFactor(format!(
            "target size {width}x{height}"
        )));
    }
    if image.size_is(width, height) {
        return Ok(image.duplicate());
    }

    let mut out = RasterImageMut::new(width, height)?;
    match method.resolve(image.size(), (width, height)) {
        ScaleMethod::Sampling => scale_sampling(image, &mut out),
        ScaleMethod::AreaMap => scale_area_map(image, &mut out),
        _ => scale_linear(image, &mut out),
    }
    Ok(out.into())
}

/// Scale both dimensions by `factor`; the new size is truncated.
pub fn resize_by(image: &RasterImage, factor: f32) -> TransformResult<RasterImage> {
    resize_by_xy(image, factor, factor)
}

/// Scale width by `fx` and height by `fy`; the new size is truncated.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if a factor is not a
/// positive finite number, or if the truncated size is 0.
pub fn resize_by_xy(image: &RasterImage, fx: f32, fy: f32) -> TransformResult<RasterImage> {
    if !(fx.is_finite() && fx > 0.0 && fy.is_finite() && fy > 0.0) {
        return Err(TransformError::InvalidScaleFactor(format!(
            "factors {fx} x {fy}"
        )));
    }
    let w = (image.width() as f32 * fx) as u32;
    let h = (image.height() as f32 * fy) as u32;
    resize_to(image, w, h)
}

/// Resize every image to `width x height`.
pub fn resize_all(
    images: &[RasterImage],
    width: u32,
    height: u32,
) -> TransformResult<Vec<RasterImage>> {
    images
        .iter()
        .map(|img| resize_to(img, width, height))
        .collect()
}

/// Scale every image by `factor`.
pub fn resize_all_by(images: &[RasterImage], factor: f32) -> TransformResult<Vec<RasterImage>> {
    images.iter().map(|img| resize_by(img, factor)).collect()
}

/// Map destination pixel center `d` to source pixel-index space.
#[inline]
fn source_coord(d: u32, ratio: f32) -> f32 {
    (d as f32 + 0.5) * ratio - 0.5
}

fn scale_sampling(src: &RasterImage, dst: &mut RasterImageMut) {
    let rx = src.width() as f32 / dst.width() as f32;
    let ry = src.height() as f32 / dst.height() as f32;
    let max_x = src.width() - 1;
    let max_y = src.height() - 1;
    for y in 0..dst.height() {
        let sy = ((y as f32 + 0.5) * ry) as u32;
        for x in 0..dst.width() {
            let sx = ((x as f32 + 0.5) * rx) as u32;
            let val = src.get_pixel_unchecked(sx.min(max_x), sy.min(max_y));
            dst.set_pixel_unchecked(x, y, val);
        }
    }
}

fn scale_linear(src: &RasterImage, dst: &mut RasterImageMut) {
    let rx = src.width() as f32 / dst.width() as f32;
    let ry = src.height() as f32 / dst.height() as f32;
    for y in 0..dst.height() {
        let sy = source_coord(y, ry);
        for x in 0..dst.width() {
            let sx = source_coord(x, rx);
            let val = interp::bilinear(src, sx, sy, Edge::Clamp);
            dst.set_pixel_unchecked(x, y, val);
        }
    }
}

/// Source pixel spans covered by destination cell `d`, with their
/// coverage lengths.
fn spans(d: u32, ratio: f32, limit: u32) -> Vec<(u32, f32)> {
    let start = d as f32 * ratio;
    let end = (d as f32 + 1.0) * ratio;
    let first = start.floor() as u32;
    let last = (end.ceil() as u32).min(limit);
    (first..last)
        .filter_map(|s| {
            let cover = end.min(s as f32 + 1.0) - start.max(s as f32);
            (cover > 0.0).then_some((s, cover))
        })
        .collect()
}

fn scale_area_map(src: &RasterImage, dst: &mut RasterImageMut) {
    let rx = src.width() as f32 / dst.width() as f32;
    let ry = src.height() as f32 / dst.height() as f32;
    let cols: Vec<Vec<(u32, f32)>> = (0..dst.width())
        .map(|x| spans(x, rx, src.width()))
        .collect();

    for y in 0..dst.height() {
        let rows = spans(y, ry, src.height());
        for (x, col) in cols.iter().enumerate() {
            let mut acc = Accum::default();
            let mut total = 0.0;
            for &(sy, wy) in &rows {
                for &(sx, wx) in col {
                    acc.add(src.get_pixel_unchecked(sx, sy), wx * wy);
                    total += wx * wy;
                }
            }
            dst.set_pixel_unchecked(x as u32, y, acc.resolve(total));
        }
    }
}
