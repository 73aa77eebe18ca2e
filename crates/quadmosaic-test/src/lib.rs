//! quadmosaic-test - Regression harness and synthetic images
//!
//! [`RegParams`] records numeric, pixel and file checks for one regression
//! test and reports them together at [`RegParams::cleanup`]. Written images
//! are compared with goldens according to [`RegTestMode`]:
//!
//! - **Generate**: outputs overwrite the goldens
//! - **Compare**: outputs must match the goldens (missing ones are created)
//! - **Display**: outputs are written for inspection only
//!
//! Every test image is built in code by the functions in this crate, so
//! decomposition expectations can be worked out by hand.
//!
//! # Usage
//!
//! ```ignore
//! use quadmosaic_test::{RegParams, solid_image};
//!
//! let mut rp = RegParams::new("subdivide");
//! let pix = solid_image(16, 16, (10, 20, 30)).unwrap();
//! rp.compare_values(1.0, leaves.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod images;
mod params;

pub use error::{TestError, TestResult};
pub use images::{
    checkerboard_image, gradient_image, pattern_image, quadrant_image, solid_image,
};
pub use params::{RegParams, RegTestMode};

/// Workspace root, two levels above this crate's manifest directory
fn workspace_root() -> String {
    format!("{}/../..", env!("CARGO_MANIFEST_DIR"))
}

/// Directory holding golden outputs (`tests/golden` at the workspace root)
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Directory receiving the outputs of the current run (`tests/regout`)
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
