//! gapseg-test - Regression test framework for gapseg
//!
//! This crate provides the helpers the `*_reg` integration tests share:
//!
//! - **RegParams**: indexed value and raster comparisons with a final report
//! - **Patterns**: build small rasters from ASCII art
//! - **regout_dir**: scratch directory for files written by tests
//!
//! # Usage
//!
//! ```ignore
//! use gapseg_test::{RegParams, raster_from_pattern};
//!
//! let mut rp = RegParams::new("scan");
//! let raster = raster_from_pattern(&["5..", ".5.", "..5"]).unwrap();
//! rp.compare_values(3.0, raster.count_foreground() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"; display mode
//!   also prints compared rasters

mod error;
mod params;
mod pattern;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use pattern::{raster_from_pattern, raster_from_points, render_pattern};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // gapseg-test is at crates/gapseg-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/target/regout", workspace_root())
}
