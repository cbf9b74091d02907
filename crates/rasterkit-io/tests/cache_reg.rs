//! Image cache regression test
//!
//! Checks:
//!   1. Loading a path twice shares one buffer while a handle is alive
//!   2. Different spellings of the same path hit the same entry
//!   3. After every handle is dropped, a reload decodes a fresh buffer
//!   4. Saving through the cache invalidates the entry
//!   5. Threads racing to load one uncached path all share one buffer

use rasterkit_core::color;
use rasterkit_core::RasterImage;
use rasterkit_io::{CacheOptions, ImageCache, load, save};
use rasterkit_test::{RegParams, regout_dir, synth};
use std::thread;

const RACERS: usize = 8;

fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

#[test]
fn cache_reg() {
    let mut rp = RegParams::new("cache");
    let dir = regout_dir();
    let path = dir.join("cache.sprite.png");
    let img = synth::sprite(20, 20, 5, 5, 6, 6, color::compose_rgb(0, 128, 255));
    save(&path, &img).expect("save sprite");

    // --- Identity while alive ---
    let a = load(&path).expect("first load");
    let b = load(&path).expect("second load");
    rp.compare_values(1.0, flag(a.same_buffer(&b)), 0.0);
    rp.compare_images(&img, &a);

    let dotted = dir.join(".").join("cache.sprite.png");
    let c = load(&dotted).expect("dotted load");
    rp.compare_values(1.0, flag(c.same_buffer(&a)), 0.0);

    // --- Reclaim ---
    let weak = a.downgrade();
    drop((a, b, c));
    rp.compare_values(1.0, flag(weak.is_reclaimed()), 0.0);
    let fresh = load(&path).expect("reload");
    rp.compare_images(&img, &fresh);

    // --- Save invalidates ---
    let inverted = fresh.reverse_color();
    save(&path, &inverted).expect("save inverted");
    let reread = load(&path).expect("load after save");
    rp.compare_values(0.0, flag(reread.same_buffer(&fresh)), 0.0);
    rp.compare_images(&inverted, &reread);
    rp.compare_images(&img, &fresh);

    // --- A private cache is independent of the global one ---
    let local = ImageCache::new(CacheOptions::default().capacity(4));
    let own = local.load(&path).expect("private load");
    rp.compare_values(0.0, flag(own.same_buffer(&reread)), 0.0);
    rp.compare_values(1.0, local.len() as f64, 0.0);
    rp.compare_values(4.0, local.options().capacity as f64, 0.0);

    // --- Concurrent loads of one uncached path ---
    let racing = ImageCache::new(CacheOptions::default());
    let handles: Vec<RasterImage> = thread::scope(|s| {
        let workers: Vec<_> = (0..RACERS)
            .map(|_| s.spawn(|| racing.load(&path).expect("racing load")))
            .collect();
        workers
            .into_iter()
            .map(|w| w.join().expect("loader thread panicked"))
            .collect()
    });
    let shared = handles.iter().all(|h| h.same_buffer(&handles[0]));
    rp.compare_values(1.0, flag(shared), 0.0);
    rp.compare_values(1.0, racing.len() as f64, 0.0);
    rp.compare_images(&inverted, &handles[0]);

    assert!(rp.cleanup(), "cache regression test failed");
}
