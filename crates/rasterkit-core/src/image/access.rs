//! Pixel access by coordinate

use super::{RasterImage, RasterImageMut};
use crate::error::{Error, Result};
use crate::raster::Pixel;

fn out_of_bounds(x: u32, y: u32, (width, height): (u32, u32)) -> Error {
    Error::IndexOutOfBounds {
        x,
        y,
        width,
        height,
    }
}

impl RasterImage {
    /// Get the packed color at (x, y), or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`; an `x >= width` reads into the next row.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// The pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        self.get_pixel(x, y)
            .map(Pixel::new)
            .ok_or_else(|| out_of_bounds(x, y, self.size()))
    }
}

impl RasterImageMut {
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[y as usize * self.width() as usize + x as usize])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(out_of_bounds(x, y, self.size()));
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let w = self.width() as usize;
        self.data_mut()[y as usize * w + x as usize] = val;
    }

    /// Copy `src` into this image with its top-left corner at `(dx, dy)`.
    ///
    /// Pixels that land outside this image are dropped. No blending: the
    /// source values replace the destination values.
    pub fn blit(&mut self, src: &RasterImage, dx: u32, dy: u32) {
        if dx >= self.width() || dy >= self.height() {
            return;
        }
        let cols = src.width().min(self.width() - dx) as usize;
        let rows = src.height().min(self.height() - dy);
        for y in 0..rows {
            let line = &src.row_data(y)[..cols];
            let dst = self.row_data_mut(dy + y);
            dst[dx as usize..dx as usize + cols].copy_from_slice(line);
        }
    }
}
