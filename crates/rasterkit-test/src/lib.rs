//! rasterkit-test - Regression test framework for rasterkit
//!
//! Three modes, chosen with the `REGTEST_MODE` environment variable:
//!
//! - **Generate**: write golden files
//! - **Compare**: compare results with golden files (default)
//! - **Display**: run without comparison
//!
//! # Usage
//!
//! ```ignore
//! use rasterkit_test::RegParams;
//!
//! let mut rp = RegParams::new("mosaic");
//! rp.compare_values(16.0, tiles.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Test images are built in code by [`synth`] instead of being read from a
//! data directory.

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rasterkit_core::RasterImage;
use std::path::{Path, PathBuf};

/// Get the path to the workspace root
pub fn workspace_root() -> PathBuf {
    // rasterkit-test lives at crates/rasterkit-test
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Get the path to the golden files directory
pub fn golden_dir() -> PathBuf {
    workspace_root().join("tests/golden")
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> PathBuf {
    workspace_root().join("tests/regout")
}

/// Install `env_logger` for the test binary, once.
///
/// Output goes through the test harness capture, so it only shows for
/// failing tests or with `--nocapture`. Honors `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Read an image file for a test, bypassing the image cache.
pub fn load_image<P: AsRef<Path>>(path: P) -> TestResult<RasterImage> {
    let path = path.as_ref();
    rasterkit_io::read_image(path).map_err(|e| TestError::ImageLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
