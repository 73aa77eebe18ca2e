//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use quadmosaic_core::Pix;
use quadmosaic_io::ImageFormat;
use std::fs;
use std::path::Path;

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

    /// Parse mode from a string; anything unrecognized means compare
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the running check
/// index, the mode and every failure recorded so far. Checks never panic;
/// the test asserts on [`RegParams::cleanup`] at the end.
pub struct RegParams {
    /// Name of the test (e.g., "subdivide")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
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
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        false
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never satisfies `diff <= delta`
        if diff <= delta {
            return true;
        }
        let msg = format!(
            "Failure in {}_reg: value comparison for index {}\n\
             difference = {} but allowed delta = {}\n\
             expected = {}, actual = {}",
            self.test_name, self.index, diff, delta, expected, actual
        );
        self.fail(msg)
    }

    /// Record a boolean condition, with a label used in the failure message
    pub fn check(&mut self, condition: bool, label: &str) -> bool {
        self.index += 1;
        if condition {
            return true;
        }
        let msg = format!(
            "Failure in {}_reg: check {} failed for index {}",
            self.test_name, label, self.index
        );
        self.fail(msg)
    }

    /// Compare two images for exact pixel equality
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) {
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - size mismatch {}x{} vs {}x{}",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            );
            return self.fail(msg);
        }

        let first_diff = pix1
            .data()
            .iter()
            .zip(pix2.data())
            .position(|(a, b)| a != b);
        if let Some(pos) = first_diff {
            let w = pix1.width().max(1) as usize;
            let msg = format!(
                "Failure in {}_reg: pix comparison for index {} - pixel mismatch at ({}, {})",
                self.test_name,
                self.index,
                pos % w,
                pos / w
            );
            return self.fail(msg);
        }

        true
    }

    /// Write an image to the regout directory and check it against its golden file
    pub fn write_pix_and_check(&mut self, pix: &Pix, format: ImageFormat) -> TestResult<()> {
        self.index += 1;

        let local_path = self.local_path(format.extension());
        quadmosaic_io::write_image(pix, &local_path, format).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.clone(),
                message: e.to_string(),
            }
        })?;

        self.check_file(&local_path)
    }

    fn local_path(&self, ext: &str) -> String {
        format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            ext
        )
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode the file becomes the golden. In compare mode a
    /// missing golden is created from the file (first run) and an existing
    /// one must match byte for byte or, for images, pixel for pixel.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    fs::copy(local_path, &golden_path)?;
                    eprintln!("Golden missing, created: {}", golden_path);
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data && !self.same_image_files(local_path, &golden_path)
                {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Compare two image files pixel-by-pixel
    fn same_image_files(&self, path1: &str, path2: &str) -> bool {
        match (
            quadmosaic_io::read_image(path1),
            quadmosaic_io::read_image(path2),
        ) {
            (Ok(pix1), Ok(pix2)) => pix1.sizes_equal(&pix2) && pix1.data() == pix2.data(),
            _ => false,
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if every check passed.
    pub fn cleanup(self) -> bool {
        let success = self.failures.is_empty();
        if success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
