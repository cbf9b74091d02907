//! rasterkit-transform - Geometric transformations for rasterkit
//!
//! This crate provides:
//!
//! - Quarter-turn rotations and flips (lossless index remapping)
//! - Arbitrary-angle rotation about the image center
//! - Resizing (sampling, bilinear, area mapping)
//! - Tiling with a scaled tile size
//!
//! Angles are in degrees, positive = clockwise.

mod error;
mod interp;
pub mod rotate;
pub mod scale;
pub mod tile;

pub use error::{TransformError, TransformResult};
pub use rotate::{
    RotateFill, RotateMethod, RotateOptions, flip_lr, flip_tb, normalize_angle, rotate,
    rotate_180, rotate_90, rotate_orth, rotate_raster, rotate_with_options,
};
pub use scale::{
    ScaleMethod, resize_all, resize_all_by, resize_by, resize_by_xy, resize_to, scale_to_size,
};
pub use tile::tiling_scaled;
