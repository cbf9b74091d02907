//! rasterkit-io - Image file I/O for rasterkit
//!
//! Reading accepts PNG, JPEG, GIF, BMP, TIFF, WebP and PNM, chosen by the
//! file's magic bytes rather than its extension. Writing always produces
//! PNG with an alpha channel.
//!
//! [`load`] and [`save`] go through the process-wide [`ImageCache`], so
//! repeated loads of one path share a buffer while any handle is alive.
//! [`read_image`] and [`write_image`] bypass the cache.

pub mod cache;
mod decode;
mod error;
pub mod format;
pub mod png;

pub use cache::{CacheOptions, ImageCache};
pub use decode::{decode, from_rgba_image, to_rgba_image};
pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use log::debug;
use rasterkit_core::RasterImage;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read and decode an image file, without consulting the cache.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` is not an existing file and
/// [`IoError::DecodeError`] when the contents cannot be decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RasterImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(IoError::FileNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    let image = decode(&bytes)?;
    debug!(
        "read {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Encode `image` as PNG and write it to `path`, replacing any existing
/// file. The extension of `path` is not consulted.
pub fn write_image<P: AsRef<Path>>(image: &RasterImage, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    png::write_png(image, &mut out)?;
    out.flush()?;
    debug!("wrote {} as PNG", path.display());
    Ok(())
}

/// Load an image through the global cache.
pub fn load<P: AsRef<Path>>(path: P) -> IoResult<RasterImage> {
    ImageCache::global().load(path)
}

/// Save an image as PNG and invalidate its global cache entry.
pub fn save<P: AsRef<Path>>(path: P, image: &RasterImage) -> IoResult<()> {
    ImageCache::global().save(path, image)
}
