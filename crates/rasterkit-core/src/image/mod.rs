//! RasterImage - the main image container
//!
//! A `RasterImage` owns a fixed-size buffer of packed `0xRRGGBBAA` colors,
//! one `u32` per pixel, rows stored top to bottom without padding.
//!
//! # Ownership model
//!
//! `RasterImage` uses `Arc` for cheap cloning: `clone()` aliases the same
//! buffer, [`RasterImage::duplicate`] makes an independent deep copy. To
//! modify pixels, build a [`RasterImageMut`] (exclusive) and convert it with
//! `Into<RasterImage>`, or write a [`Raster`] back with
//! [`Raster::update_image`], which copies the buffer first when it is shared.
//!
//! The image holds no OS resources; dropping the last handle frees it.
//! A `RasterImage` is never mutated through a shared reference, so it can be
//! handed to other threads freely.

mod access;
mod colorspace;
mod compose;
mod geometry;
pub mod trim;

use crate::error::{Error, Result};
use crate::raster::Raster;
use std::fmt;
use std::sync::{Arc, Weak};

/// Internal image data
#[derive(Debug, Clone)]
struct ImageData {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl ImageData {
    fn blank(width: u32, height: u32) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![crate::color::CLEAR_BLACK; len],
        })
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

/// Shared, immutable image.
///
/// # Examples
///
/// ```
/// use rasterkit_core::RasterImage;
///
/// let img = RasterImage::new(640, 480).unwrap();
/// assert_eq!(img.size(), (640, 480));
/// // a fresh image is fully transparent black
/// assert!(img.data().iter().all(|&v| v == 0));
/// ```
#[derive(Debug, Clone)]
pub struct RasterImage {
    inner: Arc<ImageData>,
}

impl RasterImage {
    /// Create a blank, fully transparent image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ImageData::blank(width, height)?),
        })
    }

    /// Wrap an existing row-major buffer of packed colors without copying.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::PixelCountMismatch`] if the buffer length is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(Error::PixelCountMismatch {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(width, height, data))
    }

    /// Wrap a buffer whose length is already known to be `width * height`.
    fn from_parts(width: u32, height: u32, data: Vec<u32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            inner: Arc::new(ImageData {
                width,
                height,
                data,
            }),
        }
    }

    /// Build an image from a vector of equally long rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if there are no rows or the rows
    /// are empty, and [`Error::DimensionMismatch`] if the rows differ in
    /// length.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len() as u32);
        let mut data = Vec::with_capacity(checked_len(width, height)?);
        for row in rows {
            if row.len() as u32 != width {
                return Err(Error::DimensionMismatch {
                    expected: (width, height),
                    actual: (row.len() as u32, height),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_pixels(width, height, data)
    }

    /// Materialize a raster as a new image.
    pub fn from_raster(raster: &Raster) -> Self {
        Self {
            inner: Arc::new(ImageData {
                width: raster.width(),
                height: raster.height(),
                data: raster.to_values(),
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// `(width, height)`
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Raw access to the packed pixel buffer, for painting.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// One row of packed pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = y as usize * self.inner.width as usize;
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get the number of strong references to this buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// `true` if both handles alias the same buffer.
    #[inline]
    pub fn same_buffer(&self, other: &RasterImage) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// A weak handle that does not keep the buffer alive.
    pub fn downgrade(&self) -> WeakRasterImage {
        WeakRasterImage {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Create an independent deep copy.
    ///
    /// Unlike `clone()`, which shares the buffer via `Arc`, the duplicate
    /// owns new storage.
    pub fn duplicate(&self) -> Self {
        Self {
            inner: Arc::new(ImageData::clone(&self.inner)),
        }
    }

    /// `n` independent duplicates.
    pub fn n_copies(&self, n: usize) -> Vec<RasterImage> {
        (0..n).map(|_| self.duplicate()).collect()
    }

    /// Try to get exclusive access to the buffer.
    ///
    /// Succeeds only if this is the only handle.
    pub fn try_into_mut(self) -> std::result::Result<RasterImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(RasterImageMut { inner }),
            Err(inner) => Err(RasterImage { inner }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> RasterImageMut {
        RasterImageMut {
            inner: ImageData::clone(&self.inner),
        }
    }

    /// Overwrite the buffer with a raster of identical size, copying first
    /// if the buffer is shared.
    pub(crate) fn write_raster(&mut self, raster: &Raster) {
        debug_assert_eq!(self.size(), raster.size());
        if Arc::strong_count(&self.inner) > 1 {
            log::trace!("write-back into shared {self}, copying buffer");
        }
        let inner = Arc::make_mut(&mut self.inner);
        for (dst, src) in inner.data.iter_mut().zip(raster.pixels()) {
            *dst = src.value();
        }
    }

    /// A detached row-major snapshot of the pixels.
    pub fn as_raster(&self) -> Raster {
        Raster::from_values(self.width(), self.height(), self.data())
    }

    /// Packed pixels as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.data()
            .chunks_exact(self.width() as usize)
            .map(<[u32]>::to_vec)
            .collect()
    }

    /// `true` if the image is exactly `width x height`.
    #[inline]
    pub fn size_is(&self, width: u32, height: u32) -> bool {
        self.size() == (width, height)
    }

    /// `true` if both images have the same dimensions.
    #[inline]
    pub fn same_size(&self, other: &RasterImage) -> bool {
        self.size() == other.size()
    }
}

impl PartialEq for RasterImage {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) || (self.size() == other.size() && self.data() == other.data())
    }
}

impl Eq for RasterImage {}

impl fmt::Display for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RasterImage({}x{})", self.width(), self.height())
    }
}

/// Weak handle to a [`RasterImage`] buffer.
#[derive(Debug, Clone, Default)]
pub struct WeakRasterImage {
    inner: Weak<ImageData>,
}

impl WeakRasterImage {
    /// Recover a strong handle if the buffer is still alive.
    pub fn upgrade(&self) -> Option<RasterImage> {
        self.inner.upgrade().map(|inner| RasterImage { inner })
    }

    /// `true` once every strong handle has been dropped.
    pub fn is_reclaimed(&self) -> bool {
        self.inner.strong_count() == 0
    }
}

/// Mutable image
///
/// Exclusive owner of a pixel buffer. Convert back to a shareable
/// [`RasterImage`] using `Into<RasterImage>`.
#[derive(Debug)]
pub struct RasterImageMut {
    inner: ImageData,
}

impl RasterImageMut {
    /// Create a blank, fully transparent mutable image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            inner: ImageData::blank(width, height)?,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get a mutable row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: u32) {
        self.inner.data.fill(value);
    }
}

impl From<RasterImageMut> for RasterImage {
    fn from(image: RasterImageMut) -> Self {
        RasterImage {
            inner: Arc::new(image.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn test_image_creation() {
        let img = RasterImage::new(100, 200).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 200);
        assert_eq!(img.data().len(), 20_000);
        assert!(img.data().iter().all(|&v| v == color::CLEAR_BLACK));
    }

    #[test]
    fn test_image_creation_invalid() {
        assert!(RasterImage::new(0, 100).is_err());
        assert!(RasterImage::new(100, 0).is_err());
        assert!(RasterImageMut::new(0, 0).is_err());
    }

    #[test]
    fn test_clone_shares_data() {
        let img1 = RasterImage::new(10, 10).unwrap();
        let img2 = img1.clone();
        assert_eq!(img1.ref_count(), 2);
        assert!(img1.same_buffer(&img2));
        assert_eq!(img1.data().as_ptr(), img2.data().as_ptr());
    }

    #[test]
    fn test_duplicate() {
        let img1 = RasterImage::new(10, 10).unwrap().fill_by(color::WHITE);
        let img2 = img1.duplicate();
        assert_eq!(img1.ref_count(), 1);
        assert_eq!(img2.ref_count(), 1);
        assert!(!img1.same_buffer(&img2));
        assert_eq!(img1, img2);
    }

    #[test]
    fn test_n_copies_are_independent() {
        let img = RasterImage::new(3, 3).unwrap();
        let copies = img.n_copies(3);
        assert_eq!(copies.len(), 3);
        assert!(copies.iter().all(|c| *c == img && !c.same_buffer(&img)));
        assert!(!copies[0].same_buffer(&copies[1]));
    }

    #[test]
    fn test_try_into_mut() {
        let img = RasterImage::new(4, 4).unwrap();
        let shared = img.clone();
        let img = img.try_into_mut().unwrap_err();
        drop(shared);
        let mut m = img.try_into_mut().unwrap();
        m.fill(color::BLACK);
        let img: RasterImage = m.into();
        assert!(img.data().iter().all(|&v| v == color::BLACK));
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(RasterImage::from_pixels(2, 2, vec![0; 4]).is_ok());
        let err = RasterImage::from_pixels(2, 2, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            Error::PixelCountMismatch {
                expected: 4,
                actual: 5
            }
        );
        assert_eq!(err.to_string(), "pixel count mismatch: expected 4, got 5");
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let img = RasterImage::from_rows(&rows).unwrap();
        assert_eq!(img.size(), (3, 2));
        assert_eq!(img.to_rows(), rows);
        assert_eq!(img.as_raster().to_rows(), rows);
        assert_eq!(RasterImage::from_raster(&img.as_raster()), img);

        assert!(RasterImage::from_rows(&[]).is_err());
        assert!(RasterImage::from_rows(&[vec![1, 2], vec![3]]).is_err());
    }

    #[test]
    fn test_raster_is_a_snapshot() {
        let img = RasterImage::new(2, 2).unwrap();
        let mut raster = img.as_raster();
        raster.of_mut(0, 0).unwrap().set_value(color::WHITE);
        assert_eq!(img.get_pixel(0, 0), Some(color::CLEAR_BLACK));
    }

    #[test]
    fn test_weak_handle() {
        let img = RasterImage::new(2, 2).unwrap();
        let weak = img.downgrade();
        assert!(weak.upgrade().unwrap().same_buffer(&img));
        drop(img);
        assert!(weak.is_reclaimed());
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_size_helpers() {
        let a = RasterImage::new(3, 4).unwrap();
        let b = RasterImage::new(3, 4).unwrap();
        assert!(a.size_is(3, 4));
        assert!(!a.size_is(4, 3));
        assert!(a.same_size(&b));
        assert_eq!(a.to_string(), "RasterImage(3x4)");
    }
}
