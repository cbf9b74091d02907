//! rasterkit core - image buffer, pixel view and color model
//!
//! This crate provides the fundamental types used throughout rasterkit:
//!
//! - [`RasterImage`] / [`RasterImageMut`] - The image container (shared / exclusive)
//! - [`Raster`] - A detached, row-major grid snapshot of an image
//! - [`Pixel`] - A single packed color cell with clamped channel arithmetic
//! - [`color`] - Packing, unpacking and inversion of 32-bit colors
//!
//! Every transform on [`RasterImage`] is pure and returns a new image. The
//! only way to change an existing image is to write a [`Raster`] back into
//! it with [`Raster::update_image`].
//!
//! # Example
//!
//! ```
//! use rasterkit_core::{RasterImage, color};
//!
//! let img = RasterImage::new(4, 3).unwrap().fill_by(color::WHITE);
//! let raster = img.as_raster().map(|mut p| {
//!     p.set_g(0);
//!     p
//! });
//! let magenta = raster.new_image(&img).unwrap();
//! assert_eq!(magenta.get_pixel(0, 0), Some(color::compose_rgba(255, 0, 255, 255)));
//! assert_eq!(img.get_pixel(0, 0), Some(color::WHITE));
//! ```

pub mod color;
pub mod error;
pub mod image;
pub mod raster;

pub use error::{Error, Result};
pub use image::trim;
pub use image::{RasterImage, RasterImageMut, WeakRasterImage};
pub use raster::{Pixel, Raster};
