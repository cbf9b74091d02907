//! Per-pixel color transforms
//!
//! Every operation here walks the image once through a [`Raster`](crate::raster::Raster) and
//! returns a new image of the same size; the receiver is never modified.

use super::RasterImage;
use crate::color::{self, BLACK, WHITE};
use crate::raster::Pixel;

/// Luma weights applied by [`RasterImage::weighted_gray_scale`]
const LUMA_R: f32 = 0.298912;
const LUMA_G: f32 = 0.586611;
const LUMA_B: f32 = 0.114478;

/// Sepia channel factors applied on top of the grayscale image
const SEPIA_R: f32 = 1.12;
const SEPIA_G: f32 = 0.66;
const SEPIA_B: f32 = 0.20;

impl RasterImage {
    fn map_pixels<F>(&self, f: F) -> RasterImage
    where
        F: FnMut(Pixel) -> Pixel,
    {
        RasterImage::from_raster(&self.as_raster().map(f))
    }

    /// A new image of the same size where every pixel is `value`.
    pub fn fill_by(&self, value: u32) -> RasterImage {
        self.map_pixels(|_| Pixel::new(value))
    }

    /// Grayscale via [`Pixel::average`] on every pixel.
    pub fn gray_scale(&self) -> RasterImage {
        self.map_pixels(|mut p| *p.average())
    }

    /// Grayscale via a weighted luma.
    ///
    /// Each weighted term is truncated before summing; the sum goes to all
    /// three color channels and alpha is preserved.
    pub fn weighted_gray_scale(&self) -> RasterImage {
        self.map_pixels(|mut p| {
            let luma = (p.r() as f32 * LUMA_R) as i32
                + (p.g() as f32 * LUMA_G) as i32
                + (p.b() as f32 * LUMA_B) as i32;
            let a = p.a() as i32;
            *p.set_rgba(luma, luma, luma, a)
        })
    }

    /// Sepia tone: [`gray_scale`](Self::gray_scale), then red boosted and
    /// green/blue damped.
    pub fn sepia(&self) -> RasterImage {
        let mut gray = self.gray_scale();
        let toned = gray.as_raster().map(|mut p| {
            *p.mul_r(SEPIA_R).mul_g(SEPIA_G).mul_b(SEPIA_B)
        });
        // the grayscale image is not shared yet, so this writes in place
        gray.write_raster(&toned);
        gray
    }

    /// Threshold to black and white.
    ///
    /// The averaged channel value is compared against `threshold`:
    /// strictly greater gives opaque [`WHITE`], anything else opaque
    /// [`BLACK`].
    pub fn monochrome(&self, threshold: i32) -> RasterImage {
        self.map_pixels(|mut p| {
            if p.average().r() as i32 > threshold {
                Pixel::new(WHITE)
            } else {
                Pixel::new(BLACK)
            }
        })
    }

    /// Invert all four channels of every pixel.
    pub fn reverse_color(&self) -> RasterImage {
        self.map_pixels(Pixel::reverse)
    }

    /// Add `delta` to every alpha value (clamped).
    pub fn add_alpha(&self, delta: i32) -> RasterImage {
        self.map_pixels(|mut p| *p.add_a(delta))
    }

    /// Multiply every alpha value by `factor` (truncated, clamped).
    pub fn mul_alpha(&self, factor: f32) -> RasterImage {
        self.map_pixels(|mut p| *p.mul_a(factor))
    }

    /// Replace every pixel matching `predicate` with `converter(pixel)`.
    pub fn replace_color<P, C>(&self, predicate: P, converter: C) -> RasterImage
    where
        P: Fn(Pixel) -> bool,
        C: Fn(Pixel) -> Pixel,
    {
        self.map_pixels(|p| if predicate(p) { converter(p) } else { p })
    }

    /// `true` if any pixel is fully transparent.
    pub fn has_clear_pixel(&self) -> bool {
        self.data()
            .iter()
            .any(|&v| color::alpha(v) == color::ALPHA_TRANSPARENT)
    }

    /// `true` if any pixel is fully opaque.
    pub fn has_opaque_pixel(&self) -> bool {
        self.data()
            .iter()
            .any(|&v| color::alpha(v) == color::ALPHA_OPAQUE)
    }
}
