//! Bounding-box trimming
//!
//! [`RasterImage::auto_trimming`] finds the smallest rectangle holding every
//! pixel that matches a predicate. Rows are scanned from the top and from
//! the bottom; columns are scanned the same way on a quarter-turned raster,
//! where row `j` holds original column `j`.
//!
//! The predicates below cover the usual alpha-based cases.

use super::RasterImage;
use crate::color::{ALPHA_OPAQUE, ALPHA_TRANSPARENT};
use crate::raster::{Pixel, Raster};

/// Alpha is 0.
pub fn alpha_is_transparent(p: Pixel) -> bool {
    p.a() == ALPHA_TRANSPARENT
}

/// Alpha is 255.
pub fn alpha_is_opaque(p: Pixel) -> bool {
    p.a() == ALPHA_OPAQUE
}

/// Alpha is anything but 0.
pub fn alpha_is_not_transparent(p: Pixel) -> bool {
    p.a() != ALPHA_TRANSPARENT
}

/// Alpha is anything but 255.
pub fn alpha_is_not_opaque(p: Pixel) -> bool {
    p.a() != ALPHA_OPAQUE
}

/// First and last row index containing a match, or `None`.
fn row_span<F>(raster: &Raster, predicate: &F) -> Option<(u32, u32)>
where
    F: Fn(Pixel) -> bool,
{
    let hit = |row: &[Pixel]| row.iter().any(|&p| predicate(p));
    let first = raster.rows().position(hit)?;
    let last = raster.rows().rposition(hit)?;
    Some((first as u32, last as u32))
}

impl RasterImage {
    /// Crop to the inclusive bounding box of pixels matching `predicate`.
    ///
    /// Returns `None` if no pixel matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterkit_core::{RasterImage, RasterImageMut, color, trim};
    ///
    /// let mut m = RasterImageMut::new(10, 10).unwrap();
    /// m.set_pixel(3, 4, color::BLACK).unwrap();
    /// let img: RasterImage = m.into();
    ///
    /// let trimmed = img.auto_trimming(trim::alpha_is_opaque).unwrap();
    /// assert_eq!(trimmed.size(), (1, 1));
    /// assert_eq!(trimmed.get_pixel(0, 0), Some(color::BLACK));
    /// ```
    pub fn auto_trimming<F>(&self, predicate: F) -> Option<RasterImage>
    where
        F: Fn(Pixel) -> bool,
    {
        let raster = self.as_raster();
        let (top, bottom) = row_span(&raster, &predicate)?;
        let (left, right) = row_span(&raster.rotate_quarters(1), &predicate)?;
        // both spans come from this image's own rows and columns
        Some(self.crop(left, top, right - left + 1, bottom - top + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RasterImageMut;
    use crate::color;

    #[test]
    fn test_single_pixel() {
        let mut m = RasterImageMut::new(10, 10).unwrap();
        m.set_pixel(3, 4, color::WHITE).unwrap();
        let img: RasterImage = m.into();
        let t = img.auto_trimming(alpha_is_opaque).unwrap();
        assert_eq!(t.size(), (1, 1));
        assert_eq!(t.get_pixel(0, 0), Some(color::WHITE));
    }

    #[test]
    fn test_bounding_box_is_inclusive() {
        let mut m = RasterImageMut::new(8, 6).unwrap();
        m.set_pixel(1, 4, color::BLACK).unwrap();
        m.set_pixel(6, 2, color::WHITE).unwrap();
        let img: RasterImage = m.into();
        let t = img.auto_trimming(alpha_is_not_transparent).unwrap();
        assert_eq!(t.size(), (6, 3));
        assert_eq!(t.get_pixel(0, 2), Some(color::BLACK));
        assert_eq!(t.get_pixel(5, 0), Some(color::WHITE));
    }

    #[test]
    fn test_no_match() {
        let img = RasterImage::new(4, 4).unwrap();
        assert!(img.auto_trimming(alpha_is_opaque).is_none());
        assert_eq!(img.auto_trimming(alpha_is_transparent).unwrap(), img);
        assert_eq!(img.auto_trimming(alpha_is_not_opaque).unwrap(), img);
    }

    #[test]
    fn test_box_touching_far_corner() {
        let mut m = RasterImageMut::new(5, 3).unwrap();
        m.set_pixel(4, 2, color::BLACK).unwrap();
        let img: RasterImage = m.into();
        let t = img.auto_trimming(alpha_is_opaque).unwrap();
        assert_eq!(t.size(), (1, 1));
        assert_eq!(t.get_pixel(0, 0), Some(color::BLACK));

        let full = img.fill_by(color::WHITE);
        assert_eq!(full.auto_trimming(alpha_is_opaque).unwrap(), full);
    }
}
