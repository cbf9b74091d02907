//! Tiling, concatenation and mosaic

use super::{RasterImage, RasterImageMut};
use crate::error::{Error, Result};

impl RasterImage {
    /// Repeat the image `x_count` times across and `y_count` times down at
    /// native size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either count is 0.
    pub fn tiling(&self, x_count: u32, y_count: u32) -> Result<RasterImage> {
        let (w, h) = self.size();
        let out_w = x_count.checked_mul(w).unwrap_or(0);
        let out_h = y_count.checked_mul(h).unwrap_or(0);
        let mut out = RasterImageMut::new(out_w, out_h).map_err(|_| Error::InvalidDimension {
            width: x_count,
            height: y_count,
        })?;
        for ty in 0..y_count {
            for tx in 0..x_count {
                out.blit(self, tx * w, ty * h);
            }
        }
        Ok(out.into())
    }

    /// Repeat the image `n` times left to right.
    pub fn tiling_x(&self, n: u32) -> Result<RasterImage> {
        self.tiling(n, 1)
    }

    /// Place images side by side, top-aligned.
    ///
    /// The result is as wide as all inputs together and as tall as the
    /// tallest; cells below shorter images stay transparent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `images` is empty.
    pub fn concat_x(images: &[RasterImage]) -> Result<RasterImage> {
        if images.is_empty() {
            return Err(Error::InvalidArgument("no images to concatenate".into()));
        }
        let width = images
            .iter()
            .try_fold(0u32, |acc, img| acc.checked_add(img.width()))
            .ok_or(Error::InvalidArgument("concatenated width overflows".into()))?;
        let height = images.iter().map(RasterImage::height).max().unwrap_or(0);

        let mut out = RasterImageMut::new(width, height)?;
        let mut x = 0;
        for img in images {
            out.blit(img, x, 0);
            x += img.width();
        }
        Ok(out.into())
    }

    /// Pixelate in `block x block` cells.
    ///
    /// Each cell takes the color of its top-left pixel; cells along the
    /// right and bottom edges are clipped to the image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `block` is 0 and
    /// [`Error::UnsupportedGeometry`] if it exceeds either dimension.
    pub fn mosaic(&self, block: u32) -> Result<RasterImage> {
        if block < 1 {
            return Err(Error::InvalidArgument("mosaic block size < 1".into()));
        }
        if block > self.width() || block > self.height() {
            return Err(Error::UnsupportedGeometry(format!(
                "mosaic block {block} exceeds {}x{} image",
                self.width(),
                self.height()
            )));
        }

        let (w, h) = self.size();
        let mut out = self.to_mut();
        for by in (0..h).step_by(block as usize) {
            for bx in (0..w).step_by(block as usize) {
                let anchor = self.get_pixel_unchecked(bx, by);
                let x_end = (bx + block).min(w) as usize;
                for y in by..(by + block).min(h) {
                    out.row_data_mut(y)[bx as usize..x_end].fill(anchor);
                }
            }
        }
        Ok(out.into())
    }
}
