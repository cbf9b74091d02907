//! Synthetic test images
//!
//! Deterministic generators for the regression tests, so no binary image
//! data has to be checked in.

use rasterkit_core::color::{self, compose_rgba};
use rasterkit_core::{RasterImage, RasterImageMut};

/// Opaque gradient: red grows left to right, green top to bottom, blue
/// fixed at 128.
pub fn gradient(w: u32, h: u32) -> RasterImage {
    let ramp = |i: u32, n: u32| if n > 1 { (i * 255 / (n - 1)) as u8 } else { 0 };
    let data = (0..h)
        .flat_map(|y| (0..w).map(move |x| compose_rgba(ramp(x, w), ramp(y, h), 128, 255)))
        .collect();
    from_data(w, h, data)
}

/// Checkerboard of `cell x cell` squares alternating `a` and `b`, starting
/// with `a` at the top-left.
pub fn checkerboard(w: u32, h: u32, cell: u32, a: u32, b: u32) -> RasterImage {
    let cell = cell.max(1);
    let data = (0..h)
        .flat_map(|y| {
            (0..w).map(move |x| if (x / cell + y / cell) % 2 == 0 { a } else { b })
        })
        .collect();
    from_data(w, h, data)
}

/// White image whose alpha ramps from 0 at the left edge to 255 at the
/// right.
pub fn alpha_ramp(w: u32, h: u32) -> RasterImage {
    let data = (0..h)
        .flat_map(|_| {
            (0..w).map(move |x| {
                let a = if w > 1 { x * 255 / (w - 1) } else { 255 };
                color::with_alpha(color::WHITE, a as u8)
            })
        })
        .collect();
    from_data(w, h, data)
}

/// Transparent canvas with an opaque `rw x rh` rectangle of `value` at
/// `(rx, ry)`; the rectangle is clipped to the canvas.
pub fn sprite(w: u32, h: u32, rx: u32, ry: u32, rw: u32, rh: u32, value: u32) -> RasterImage {
    let mut m = blank(w, h);
    for y in ry..ry.saturating_add(rh).min(h) {
        for x in rx..rx.saturating_add(rw).min(w) {
            m.set_pixel_unchecked(x, y, value);
        }
    }
    m.into()
}

/// Pixel `i` in row-major order holds the value `i`.
pub fn numbered(w: u32, h: u32) -> RasterImage {
    from_data(w, h, (0..w * h).collect())
}

fn blank(w: u32, h: u32) -> RasterImageMut {
    RasterImageMut::new(w, h).expect("synthetic image dimensions must be non-zero")
}

fn from_data(w: u32, h: u32, data: Vec<u32>) -> RasterImage {
    RasterImage::from_pixels(w, h, data).expect("synthetic image dimensions must be non-zero")
}
