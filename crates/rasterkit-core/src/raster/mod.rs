//! Raster - a detached pixel grid
//!
//! A [`Raster`] is a row-major snapshot (`height` rows of `width` pixels)
//! copied out of a [`RasterImage`]. Changing the image afterwards does not
//! affect the raster, and changing the raster does not affect the image
//! until it is written back with [`Raster::update_image`] or materialized
//! with [`Raster::new_image`].
//!
//! Transforms on a raster ([`Raster::map`], [`Raster::rotate_quarters`])
//! return a new grid and leave the receiver untouched.

mod pixel;

pub use pixel::Pixel;

use crate::error::{Error, Result};
use crate::image::RasterImage;
use std::fmt;

/// Row-major grid of [`Pixel`] values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<Pixel>,
}

impl Raster {
    /// Create a raster from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0, or
    /// [`Error::PixelCountMismatch`] if `data.len() != width * height`.
    pub fn new(width: u32, height: u32, data: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a raster where every cell is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        Self::new(width, height, vec![pixel; width as usize * height as usize])
    }

    /// Build from packed values; the caller guarantees the length.
    pub(crate) fn from_values(width: u32, height: u32, values: &[u32]) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data: values.iter().map(|&v| Pixel::new(v)).collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the grid.
    pub fn of(&self, x: u32, y: u32) -> Result<Pixel> {
        self.index_of(x, y).map(|i| self.data[i])
    }

    /// A mutable handle to the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the grid.
    pub fn of_mut(&mut self, x: u32, y: u32) -> Result<&mut Pixel> {
        let i = self.index_of(x, y)?;
        Ok(&mut self.data[i])
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Pixel> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Iterate over pixel copies in row-major order.
    ///
    /// Each call starts a fresh pass over the current contents.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Pixel>> {
        self.data.iter().copied()
    }

    /// Apply `f` to every pixel, producing a new raster of the same size.
    pub fn map<F>(&self, mut f: F) -> Raster
    where
        F: FnMut(Pixel) -> Pixel,
    {
        Raster {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Rotate by `quarters` clockwise quarter turns.
    ///
    /// Each quarter turn is the index remap `result[x][h-1-y] = source[y][x]`,
    /// which swaps width and height. `quarters` is taken modulo 4.
    pub fn rotate_quarters(&self, quarters: u32) -> Raster {
        let mut out = self.clone();
        for _ in 0..quarters % 4 {
            out = out.rotate_cw();
        }
        out
    }

    fn rotate_cw(&self) -> Raster {
        let (w, h) = (self.width as usize, self.height as usize);
        // rotated grid is h wide and w tall
        let mut data = vec![Pixel::default(); w * h];
        for y in 0..h {
            for x in 0..w {
                data[x * h + (h - 1 - y)] = self.data[y * w + x];
            }
        }
        Raster {
            width: self.height,
            height: self.width,
            data,
        }
    }

    /// Packed values as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(|p| p.value()).collect())
            .collect()
    }

    /// Packed values in row-major order.
    pub fn to_values(&self) -> Vec<u32> {
        self.data.iter().map(|p| p.value()).collect()
    }

    /// Write this raster into `image`, replacing its pixels.
    ///
    /// If `image` shares its buffer with other handles, the buffer is copied
    /// first; those handles keep seeing the old pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ (for example
    /// after an odd number of quarter turns on a non-square raster).
    pub fn update_image(&self, image: &mut RasterImage) -> Result<()> {
        if image.size() != self.size() {
            return Err(Error::DimensionMismatch {
                expected: image.size(),
                actual: self.size(),
            });
        }
        image.write_raster(self);
        Ok(())
    }

    /// Duplicate `image` and write this raster into the duplicate.
    ///
    /// `image` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn new_image(&self, image: &RasterImage) -> Result<RasterImage> {
        let mut dst = image.duplicate();
        self.update_image(&mut dst)?;
        Ok(dst)
    }
}

impl<'a> IntoIterator for &'a Raster {
    type Item = Pixel;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Pixel>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Raster({}x{})", self.width, self.height)
    }
}
