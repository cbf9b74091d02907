//! Sub-images, grid splitting and row scrolling
//!
//! Splitting follows integer division: an image `W` wide split into tiles
//! `w` wide yields `W / w` tiles, and the trailing remainder is dropped.

use super::RasterImage;
use crate::error::{Error, Result};
use std::collections::HashMap;

impl RasterImage {
    /// Copy out the rectangle with top-left `(x, y)` and size `w x h`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `w` or `h` is 0 and
    /// [`Error::UnsupportedGeometry`] if the rectangle is not entirely inside
    /// the image.
    pub fn sub_image(&self, x: u32, y: u32, w: u32, h: u32) -> Result<RasterImage> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidDimension {
                width: w,
                height: h,
            });
        }
        let fits_x = x.checked_add(w).is_some_and(|r| r <= self.width());
        let fits_y = y.checked_add(h).is_some_and(|b| b <= self.height());
        if !fits_x || !fits_y {
            return Err(Error::UnsupportedGeometry(format!(
                "rectangle ({x}, {y}) {w}x{h} outside {}x{} image",
                self.width(),
                self.height()
            )));
        }

        Ok(self.crop(x, y, w, h))
    }

    /// Copy out a non-empty rectangle already known to lie inside the image.
    pub(super) fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> RasterImage {
        let mut data = Vec::with_capacity(w as usize * h as usize);
        for row in y..y + h {
            data.extend_from_slice(&self.row_data(row)[x as usize..(x + w) as usize]);
        }
        RasterImage::from_parts(w, h, data)
    }

    /// Split the horizontal strip starting at row `y` into `w x h` tiles,
    /// left to right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a zero tile size and
    /// [`Error::UnsupportedGeometry`] if the strip leaves the image.
    pub fn split_rows(&self, y: u32, w: u32, h: u32) -> Result<Vec<RasterImage>> {
        check_tile(w, h)?;
        (0..self.width() / w)
            .map(|i| self.sub_image(i * w, y, w, h))
            .collect()
    }

    /// Split the vertical strip starting at column `x` into `w x h` tiles,
    /// top to bottom.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a zero tile size and
    /// [`Error::UnsupportedGeometry`] if the strip leaves the image.
    pub fn split_columns(&self, x: u32, w: u32, h: u32) -> Result<Vec<RasterImage>> {
        check_tile(w, h)?;
        (0..self.height() / h)
            .map(|i| self.sub_image(x, i * h, w, h))
            .collect()
    }

    /// Tiles of the leftmost column strip; same as `split_columns(0, w, h)`.
    pub fn split_x(&self, w: u32, h: u32) -> Result<Vec<RasterImage>> {
        self.split_columns(0, w, h)
    }

    /// Split into a grid of `w x h` tiles, indexed `[row][column]`.
    pub fn split_2d(&self, w: u32, h: u32) -> Result<Vec<Vec<RasterImage>>> {
        check_tile(w, h)?;
        (0..self.height() / h)
            .map(|row| self.split_rows(row * h, w, h))
            .collect()
    }

    /// Split into a grid and key each tile by `name(column, row)`.
    ///
    /// A name produced twice keeps the tile visited last (row-major order).
    pub fn split_as_map<F>(&self, w: u32, h: u32, name: F) -> Result<HashMap<String, RasterImage>>
    where
        F: Fn(u32, u32) -> String,
    {
        let grid = self.split_2d(w, h)?;
        let mut out = HashMap::new();
        for (row, tiles) in grid.into_iter().enumerate() {
            for (col, tile) in tiles.into_iter().enumerate() {
                out.insert(name(col as u32, row as u32), tile);
            }
        }
        Ok(out)
    }

    /// Shift each row horizontally and pad with `fill`.
    ///
    /// Row `y` is shifted by `shifts[y % shifts.len()]`: positive moves
    /// content right, negative moves it left. Content pushed past an edge is
    /// discarded and the vacated cells take `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `shifts` is empty.
    pub fn raster_scroll(&self, shifts: &[i32], fill: u32) -> Result<RasterImage> {
        if shifts.is_empty() {
            return Err(Error::InvalidArgument("scroll shifts are empty".into()));
        }
        let width = self.width() as usize;
        let mut out = self.to_mut();
        for (y, &s) in (0..self.height()).zip(shifts.iter().cycle()) {
            let row = out.row_data_mut(y);
            scroll_row(row, s, width, fill);
        }
        Ok(out.into())
    }
}

fn scroll_row(row: &mut [u32], shift: i32, width: usize, fill: u32) {
    let n = (shift.unsigned_abs() as usize).min(width);
    match shift.signum() {
        1 => {
            row.copy_within(..width - n, n);
            row[..n].fill(fill);
        }
        -1 => {
            row.copy_within(n.., 0);
            row[width - n..].fill(fill);
        }
        _ => {}
    }
}

fn check_tile(w: u32, h: u32) -> Result<()> {
    if w == 0 || h == 0 {
        return Err(Error::InvalidArgument(format!("tile size {w}x{h}")));
    }
    Ok(())
}
