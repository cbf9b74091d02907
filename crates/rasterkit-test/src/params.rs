//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, init_logging, load_image, regout_dir};
use rasterkit_core::RasterImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode and every
/// failure recorded so far.
pub struct RegParams {
    /// Name of the test (e.g., "rotate")
    pub test_name: String,
    index: usize,
    pub mode: RegTestMode,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a regression test, reading the mode from `REGTEST_MODE`.
    ///
    /// Also installs the test logger and creates the output directories.
    pub fn new(test_name: &str) -> Self {
        init_logging();
        let mode = RegTestMode::from_env();

        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two values; a difference above `delta` is a failure.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            return false;
        }
        true
    }

    /// Compare two images for exact equality of size and pixels.
    pub fn compare_images(&mut self, img1: &RasterImage, img2: &RasterImage) -> bool {
        self.index += 1;

        if !img1.same_size(img2) {
            self.fail(format!(
                "Failure in {}_reg: image comparison for index {} - size {}x{} vs {}x{}",
                self.test_name,
                self.index,
                img1.width(),
                img1.height(),
                img2.width(),
                img2.height()
            ));
            return false;
        }

        let w = img1.width() as usize;
        let mismatch = img1
            .data()
            .iter()
            .zip(img2.data())
            .position(|(a, b)| a != b);
        if let Some(i) = mismatch {
            self.fail(format!(
                "Failure in {}_reg: image comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                i % w,
                i / w
            ));
            return false;
        }
        true
    }

    /// Write an image as PNG into `tests/regout` and check it against its
    /// golden file.
    pub fn write_image_and_check(&mut self, img: &RasterImage) -> TestResult<()> {
        self.index += 1;
        let local = self.local_path();
        rasterkit_io::write_image(img, &local).map_err(|e| TestError::ImageWrite {
            path: local.clone(),
            message: e.to_string(),
        })?;
        self.check_file(&local)
    }

    fn local_path(&self) -> PathBuf {
        regout_dir().join(format!("{}.{:02}.png", self.test_name, self.index))
    }

    /// Check a PNG file against its golden counterpart.
    ///
    /// Generate mode copies the file to golden. Compare mode compares the
    /// decoded pixels; a missing golden file is a failure. Display mode
    /// does nothing.
    fn check_file(&mut self, local: &Path) -> TestResult<()> {
        let golden = golden_dir().join(format!(
            "{}_golden.{:02}.png",
            self.test_name, self.index
        ));

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local, &golden)?;
                eprintln!("Generated: {}", golden.display());
            }
            RegTestMode::Compare => {
                if !golden.exists() {
                    let msg = format!(
                        "Failure in {}_reg: golden file not found: {}",
                        self.test_name,
                        golden.display()
                    );
                    self.fail(msg);
                    return Ok(());
                }
                let differs = fs::read(local)? != fs::read(&golden)?;
                if differs && !same_image_files(local, &golden)? {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name,
                        self.index,
                        local.display(),
                        golden.display()
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {}
        }
        Ok(())
    }

    /// Report results; `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();
        self.success
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Decode both files and compare pixels; encoder differences alone are not
/// a mismatch.
fn same_image_files(path1: &Path, path2: &Path) -> TestResult<bool> {
    Ok(load_image(path1)? == load_image(path2)?)
}
