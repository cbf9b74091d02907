//! Premultiplied-alpha resampling helpers shared by rotation and scaling
//!
//! Colors are weighted by their alpha before they are mixed, so fully
//! transparent neighbors never bleed their (meaningless) color into the
//! result.

use rasterkit_core::RasterImage;
use rasterkit_core::color::{self, CLEAR_BLACK};

/// How samples outside the source are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    /// Use the nearest edge pixel
    Clamp,
    /// Treat as fully transparent
    Transparent,
}

/// Running premultiplied sum of weighted samples.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Accum {
    a: f32,
    r: f32,
    g: f32,
    b: f32,
}

impl Accum {
    #[inline]
    pub(crate) fn add(&mut self, value: u32, weight: f32) {
        let a = color::alpha(value) as f32 * weight;
        self.a += a;
        self.r += color::red(value) as f32 * a;
        self.g += color::green(value) as f32 * a;
        self.b += color::blue(value) as f32 * a;
    }

    /// Un-premultiply. `total` is the sum of all weights added, including
    /// those of transparent or missing samples.
    pub(crate) fn resolve(&self, total: f32) -> u32 {
        if self.a <= 0.0 || total <= 0.0 {
            return CLEAR_BLACK;
        }
        let ch = |c: f32| (c / self.a).round() as i32;
        color::pack(
            (self.a / total).round() as i32,
            ch(self.r),
            ch(self.g),
            ch(self.b),
        )
    }
}

fn fetch(img: &RasterImage, x: i64, y: i64, edge: Edge) -> Option<u32> {
    let (w, h) = (img.width() as i64, img.height() as i64);
    match edge {
        Edge::Clamp => {
            let cx = x.clamp(0, w - 1) as u32;
            let cy = y.clamp(0, h - 1) as u32;
            Some(img.get_pixel_unchecked(cx, cy))
        }
        Edge::Transparent => {
            if x < 0 || y < 0 || x >= w || y >= h {
                None
            } else {
                Some(img.get_pixel_unchecked(x as u32, y as u32))
            }
        }
    }
}

/// Bilinear sample at `(sx, sy)`, where pixel `(i, j)` has its center at
/// integer coordinates.
pub(crate) fn bilinear(img: &RasterImage, sx: f32, sy: f32, edge: Edge) -> u32 {
    let x0 = sx.floor();
    let y0 = sy.floor();
    let fx = sx - x0;
    let fy = sy - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let mut acc = Accum::default();
    for (dx, dy, wgt) in [
        (0, 0, (1.0 - fx) * (1.0 - fy)),
        (1, 0, fx * (1.0 - fy)),
        (0, 1, (1.0 - fx) * fy),
        (1, 1, fx * fy),
    ] {
        if wgt <= 0.0 {
            continue;
        }
        if let Some(v) = fetch(img, x0 + dx, y0 + dy, edge) {
            acc.add(v, wgt);
        }
    }
    acc.resolve(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::color::{WHITE, compose_rgba};

    #[test]
    fn test_integer_position_is_exact() {
        let img = RasterImage::from_pixels(2, 1, vec![compose_rgba(10, 20, 30, 40), WHITE]).unwrap();
        assert_eq!(bilinear(&img, 0.0, 0.0, Edge::Transparent), compose_rgba(10, 20, 30, 40));
        assert_eq!(bilinear(&img, 1.0, 0.0, Edge::Transparent), WHITE);
    }

    #[test]
    fn test_transparent_neighbor_does_not_tint() {
        let img = RasterImage::from_pixels(2, 1, vec![compose_rgba(200, 0, 0, 255), 0]).unwrap();
        let mid = bilinear(&img, 0.5, 0.0, Edge::Clamp);
        assert_eq!(color::extract_rgba(mid), (200, 0, 0, 128));
    }

    #[test]
    fn test_edge_modes() {
        let img = RasterImage::from_pixels(1, 1, vec![WHITE]).unwrap();
        assert_eq!(bilinear(&img, -3.0, 5.0, Edge::Clamp), WHITE);
        assert_eq!(bilinear(&img, -3.0, 5.0, Edge::Transparent), CLEAR_BLACK);
    }

    #[test]
    fn test_accum_empty() {
        assert_eq!(Accum::default().resolve(1.0), CLEAR_BLACK);
    }
}
