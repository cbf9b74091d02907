//! Format-routed decoding and conversion to/from `image` buffers
//!
//! PNG goes through the `png` crate; every other recognized format is
//! decoded by the `image` crate and normalized to 8-bit RGBA.

use crate::format::{ImageFormat, detect_format_from_bytes};
use crate::{IoError, IoResult};
use image::{Rgba, RgbaImage};
use log::debug;
use rasterkit_core::RasterImage;
use rasterkit_core::color::{compose_rgba, extract_rgba};
use std::io::Cursor;

/// Decode an in-memory image file into the native packed buffer.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] if the bytes match no known signature,
/// the decoder fails or the image is empty.
pub fn decode(bytes: &[u8]) -> IoResult<RasterImage> {
    let format =
        detect_format_from_bytes(bytes).map_err(|e| IoError::DecodeError(e.to_string()))?;
    debug!("decoding {} bytes as {:?}", bytes.len(), format);
    match format {
        ImageFormat::Png => crate::png::read_png(Cursor::new(bytes)),
        other => {
            let dynamic = image::load_from_memory_with_format(bytes, other.to_image_format())
                .map_err(|e| IoError::DecodeError(format!("{:?} decode error: {}", other, e)))?;
            from_rgba_image(&dynamic.to_rgba8())
        }
    }
}

/// Convert an `image` RGBA buffer into a [`RasterImage`].
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] if the buffer is empty.
pub fn from_rgba_image(rgba: &RgbaImage) -> IoResult<RasterImage> {
    let (w, h) = rgba.dimensions();
    if w == 0 || h == 0 {
        return Err(IoError::DecodeError(format!("empty image {w}x{h}")));
    }
    let data = rgba
        .pixels()
        .map(|&Rgba([r, g, b, a])| compose_rgba(r, g, b, a))
        .collect();
    Ok(RasterImage::from_pixels(w, h, data)?)
}

/// Wrap a [`RasterImage`] as an `image` RGBA buffer for display or for
/// the `image` crate's encoders.
pub fn to_rgba_image(img: &RasterImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let (r, g, b, a) = extract_rgba(img.get_pixel_unchecked(x, y));
        Rgba([r, g, b, a])
    })
}
