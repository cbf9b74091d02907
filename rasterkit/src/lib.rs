//! rasterkit - raster image transforms for Rust
//!
//! A pixel-addressable view over packed `0xRRGGBBAA` image buffers and a
//! library of transforms built on it.
//!
//! # Overview
//!
//! - Image buffers shared through `Arc`, with copy-on-write write-back
//! - Per-pixel color transforms (grayscale, sepia, monochrome, inversion)
//! - Geometry (split, trim, scroll, mosaic, tiling, concatenation)
//! - Rotation and scaling in [`transform`]
//! - File I/O and a weak-reference image cache in [`io`]
//!
//! # Example
//!
//! ```
//! use rasterkit::{RasterImage, color, transform};
//!
//! let img = RasterImage::new(8, 6).unwrap().fill_by(color::WHITE);
//! let turned = transform::rotate_90(&img, true).unwrap();
//! assert_eq!(turned.size(), (6, 8));
//!
//! let small = transform::resize_to(&img, 4, 3).unwrap();
//! assert_eq!(small.get_pixel(0, 0), Some(color::WHITE));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export the other crates as modules
pub use rasterkit_io as io;
pub use rasterkit_transform as transform;

pub use rasterkit_io::{load, save};
