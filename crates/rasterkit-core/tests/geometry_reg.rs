//! Geometry regression test
//!
//! Checks:
//!   1. Splitting into strips, grids and named maps
//!   2. Auto-trimming to the bounding box of matching pixels
//!   3. Row scrolling with fill
//!   4. Mosaic blocks, tiling and side-by-side concatenation

use rasterkit_core::color;
use rasterkit_core::{Error, RasterImage, RasterImageMut, trim};
use rasterkit_test::{RegParams, synth};

fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

#[test]
fn geometry_reg() {
    let mut rp = RegParams::new("geometry");

    // --- Splitting ---
    let img = synth::numbered(10, 7);
    let strip = img.split_rows(2, 3, 2).expect("split_rows");
    rp.compare_values(3.0, strip.len() as f64, 0.0);
    rp.compare_values(20.0, strip[0].get_pixel(0, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(26.0, strip[2].get_pixel(0, 0).unwrap_or(0) as f64, 0.0);

    let column = img.split_x(4, 3).expect("split_x");
    rp.compare_values(2.0, column.len() as f64, 0.0);
    rp.compare_values(30.0, column[1].get_pixel(0, 0).unwrap_or(0) as f64, 0.0);

    let grid = img.split_2d(5, 3).expect("split_2d");
    rp.compare_values(2.0, grid.len() as f64, 0.0);
    rp.compare_values(2.0, grid[0].len() as f64, 0.0);
    let corner = img.sub_image(5, 3, 5, 3).expect("sub_image");
    rp.compare_images(&corner, &grid[1][1]);

    let named = img
        .split_as_map(5, 3, |c, r| format!("tile_{r}_{c}"))
        .expect("split_as_map");
    rp.compare_values(4.0, named.len() as f64, 0.0);
    rp.compare_values(1.0, flag(named.get("tile_1_1") == Some(&corner)), 0.0);
    let collapsed = img
        .split_as_map(5, 3, |_, _| "same".to_string())
        .expect("colliding names");
    rp.compare_values(1.0, flag(collapsed.get("same") == Some(&corner)), 0.0);

    let off_image = img.split_rows(6, 3, 2);
    rp.compare_values(
        1.0,
        flag(matches!(off_image, Err(Error::UnsupportedGeometry(_)))),
        0.0,
    );
    let zero_tile = img.split_2d(0, 3);
    rp.compare_values(1.0, flag(matches!(zero_tile, Err(Error::InvalidArgument(_)))), 0.0);

    // --- Trimming ---
    let mut m = RasterImageMut::new(10, 10).expect("10x10");
    m.set_pixel(3, 4, color::BLACK).expect("set");
    let dot: RasterImage = m.into();
    let trimmed = dot.auto_trimming(trim::alpha_is_opaque).expect("trim dot");
    rp.compare_values(1.0, flag(trimmed.size_is(1, 1)), 0.0);
    rp.compare_values(1.0, flag(trimmed.get_pixel(0, 0) == Some(color::BLACK)), 0.0);

    let sprite = synth::sprite(40, 30, 7, 5, 12, 9, color::compose_rgb(250, 120, 0));
    let cropped = sprite
        .auto_trimming(trim::alpha_is_not_transparent)
        .expect("trim sprite");
    rp.compare_values(12.0, cropped.width() as f64, 0.0);
    rp.compare_values(9.0, cropped.height() as f64, 0.0);
    rp.write_image_and_check(&cropped).expect("write cropped");
    let empty = RasterImage::new(5, 5).expect("5x5");
    rp.compare_values(0.0, flag(empty.auto_trimming(trim::alpha_is_opaque).is_some()), 0.0);

    // --- Scrolling ---
    let row = synth::numbered(5, 1);
    let fill = color::WHITE;
    let right = row.raster_scroll(&[2], fill).expect("scroll right");
    rp.compare_values(
        1.0,
        flag(right.data() == [fill, fill, 0, 1, 2]),
        0.0,
    );
    let left = row.raster_scroll(&[-1], fill).expect("scroll left");
    rp.compare_values(1.0, flag(left.data() == [1, 2, 3, 4, fill]), 0.0);
    let wiped = row.raster_scroll(&[9], fill).expect("scroll past width");
    rp.compare_values(1.0, flag(wiped.data().iter().all(|&v| v == fill)), 0.0);

    let rows = synth::numbered(4, 4);
    let wave = rows.raster_scroll(&[0, 1], fill).expect("cycled shifts");
    rp.compare_values(1.0, flag(wave.row_data(0) == rows.row_data(0)), 0.0);
    rp.compare_values(1.0, flag(wave.row_data(3) == [fill, 12, 13, 14]), 0.0);
    let no_shifts = rows.raster_scroll(&[], fill);
    rp.compare_values(1.0, flag(matches!(no_shifts, Err(Error::InvalidArgument(_)))), 0.0);

    // --- Mosaic ---
    let grad = synth::gradient(30, 20);
    let mosaic = grad.mosaic(4).expect("mosaic");
    let mut uniform = true;
    for by in (0..20).step_by(4) {
        for bx in (0..30).step_by(4) {
            let anchor = grad.get_pixel(bx, by);
            for y in by..(by + 4).min(20) {
                for x in bx..(bx + 4).min(30) {
                    uniform &= mosaic.get_pixel(x, y) == anchor;
                }
            }
        }
    }
    rp.compare_values(1.0, flag(uniform), 0.0);
    rp.write_image_and_check(&mosaic).expect("write mosaic");
    rp.compare_values(1.0, flag(matches!(grad.mosaic(0), Err(Error::InvalidArgument(_)))), 0.0);
    rp.compare_values(
        1.0,
        flag(matches!(grad.mosaic(21), Err(Error::UnsupportedGeometry(_)))),
        0.0,
    );

    // --- Tiling and concatenation ---
    let tile = synth::checkerboard(6, 4, 2, color::WHITE, color::BLACK);
    let tiled = tile.tiling(3, 2).expect("tiling");
    rp.compare_values(18.0, tiled.width() as f64, 0.0);
    rp.compare_values(8.0, tiled.height() as f64, 0.0);
    rp.compare_images(&tile, &tiled.sub_image(12, 4, 6, 4).expect("last tile"));
    rp.compare_values(4.0, tile.tiling_x(4).expect("tiling_x").width() as f64 / 6.0, 0.0);

    let parts = [synth::gradient(5, 9), tile.clone(), dot.clone()];
    let strip = RasterImage::concat_x(&parts).expect("concat_x");
    rp.compare_values(21.0, strip.width() as f64, 0.0);
    rp.compare_values(10.0, strip.height() as f64, 0.0);
    rp.compare_values(
        1.0,
        flag(strip.get_pixel(5, 9) == Some(color::CLEAR_BLACK)),
        0.0,
    );

    let copies = tile.n_copies(3);
    rp.compare_values(3.0, copies.len() as f64, 0.0);
    rp.compare_values(
        1.0,
        flag(copies.iter().all(|c| *c == tile && !c.same_buffer(&tile))),
        0.0,
    );

    assert!(rp.cleanup(), "geometry regression test failed");
}
