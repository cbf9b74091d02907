//! Rotation regression test
//!
//! Checks:
//!   1. Four successive quarter turns = identity
//!   2. Two 180-degree rotations = identity
//!   3. Two LR flips and two TB flips = identity
//!   4. Rotation by 0 (and by full turns) is a pixel-identical copy
//!   5. Arbitrary angles keep the canvas and clear the uncovered corners
//!   6. Arbitrary rotation of a raster agrees with image rotation

use rasterkit_core::color;
use rasterkit_test::{RegParams, synth};
use rasterkit_transform::{
    RotateFill, RotateMethod, RotateOptions, flip_lr, flip_tb, rotate, rotate_90, rotate_180,
    rotate_raster, rotate_with_options,
};

#[test]
fn rotate_reg() {
    let mut rp = RegParams::new("rotate");

    let img = synth::gradient(37, 23);
    let (w, h) = img.size();

    // --- Quarter turns ---
    let r90 = rotate_90(&img, true).expect("rotate_90 cw");
    rp.compare_values(h as f64, r90.width() as f64, 0.0);
    rp.compare_values(w as f64, r90.height() as f64, 0.0);

    let mut r = img.clone();
    for _ in 0..4 {
        r = rotate_90(&r, true).expect("rotate_90");
    }
    rp.compare_images(&img, &r);

    let ccw = rotate_90(&r90, false).expect("rotate_90 ccw");
    rp.compare_images(&img, &ccw);

    // --- 180 and flips ---
    let r360 = rotate_180(&rotate_180(&img).expect("180")).expect("180 twice");
    rp.compare_images(&img, &r360);

    let lr2 = flip_lr(&flip_lr(&img).expect("flip_lr")).expect("flip_lr twice");
    rp.compare_images(&img, &lr2);
    let tb2 = flip_tb(&flip_tb(&img).expect("flip_tb")).expect("flip_tb twice");
    rp.compare_images(&img, &tb2);

    // --- Zero angle ---
    for angle in [0.0f32, 360.0, -360.0, 720.0] {
        let r0 = rotate(&img, angle).expect("rotate 0");
        rp.compare_images(&img, &r0);
        rp.compare_values(0.0, if r0.same_buffer(&img) { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Arbitrary angle ---
    let square = synth::checkerboard(40, 40, 5, color::WHITE, color::BLACK);
    let r30 = rotate(&square, 30.0).expect("rotate 30");
    rp.compare_values(40.0, r30.width() as f64, 0.0);
    rp.compare_values(40.0, r30.height() as f64, 0.0);
    let corner = r30.get_pixel(0, 0).unwrap_or(color::WHITE);
    rp.compare_values(0.0, color::alpha(corner) as f64, 0.0);
    eprintln!("  rotate 30: corner = {:#010x}", corner);

    // negative angles rotate counterclockwise: -30 == 330
    let neg = rotate(&square, -30.0).expect("rotate -30");
    let pos = rotate(&square, 330.0).expect("rotate 330");
    rp.compare_images(&neg, &pos);

    // fill color shows up in the corners
    let opts = RotateOptions::with_fill(RotateFill::White).method(RotateMethod::Sampling);
    let filled = rotate_with_options(&square, 45.0, &opts).expect("rotate 45 filled");
    rp.compare_values(
        color::WHITE as f64,
        filled.get_pixel(0, 0).unwrap_or(0) as f64,
        0.0,
    );

    // --- Raster rotation ---
    let raster = img.as_raster();
    let q = rotate_raster(&raster, 90.0).expect("rotate_raster 90");
    rp.compare_images(&r90, &rasterkit_core::RasterImage::from_raster(&q));
    let free = rotate_raster(&raster, 12.5).expect("rotate_raster 12.5");
    let via_image = rotate(&img, 12.5).expect("rotate 12.5").as_raster();
    rp.compare_values(1.0, if free == via_image { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "rotate regression test failed");
}
