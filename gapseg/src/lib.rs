//! gapseg - Gap-tolerant region growing segmentation
//!
//! Partitions the foreground (non-zero samples) of a single-channel image
//! into segments. Growth is 8-connected and may cross short runs of
//! background pixels; `dist` bounds how long such a run can be.
//!
//! # Overview
//!
//! - [`io`] - loading BMP, PNG and PNM images as single-channel rasters
//! - [`region`] - the scan, region growing and segment materialization
//! - [`display`] - ASCII previews of rasters for the terminal
//!
//! # Example
//!
//! ```
//! use gapseg::Raster;
//! use gapseg::region::{Segmentation, SegmentationOptions};
//!
//! let image = Raster::from_rows(&[
//!     [5u8, 0, 0, 0],
//!     [0, 5, 0, 0],
//!     [0, 0, 5, 0],
//!     [0, 0, 0, 5],
//! ])
//! .unwrap();
//!
//! let mut seg = Segmentation::new(image);
//! let outputs = seg.run(&SegmentationOptions::new(1, 2)).unwrap();
//! assert_eq!(outputs.len(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use gapseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gapseg_io as io;
pub use gapseg_region as region;

pub mod display;
