//! Tiling with a scaled tile size

use crate::TransformResult;
use crate::scale::resize_to;
use rasterkit_core::RasterImage;

/// Repeat `image` in an `x_count x y_count` grid, each copy resized to
/// `tile_w x tile_h`.
///
/// The result is `(x_count * tile_w) x (y_count * tile_h)`. With the
/// native tile size this is the same as [`RasterImage::tiling`].
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`](crate::TransformError)
/// for a zero tile size, and a core `InvalidDimension` error for a zero
/// count.
pub fn tiling_scaled(
    image: &RasterImage,
    x_count: u32,
    y_count: u32,
    tile_w: u32,
    tile_h: u32,
) -> TransformResult<RasterImage> {
    let tile = resize_to(image, tile_w, tile_h)?;
    Ok(tile.tiling(x_count, y_count)?)
}
