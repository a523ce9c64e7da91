//! gapseg-region - Gap-tolerant region growing
//!
//! This crate partitions the foreground (non-zero samples) of a
//! single-channel raster into regions, letting short runs of background
//! pixels bridge foreground areas:
//!
//! - **Coordinate mapping** - linear index to `(row, col)` and back
//! - **Neighbor lookup** - unclaimed 8-neighbors after the current seed
//! - **Region growing** - LIFO frontier with a per-path gap budget
//! - **Full scan** - one growth per foreground pixel, in row-major order
//! - **Materialization** - size filtering and per-segment masked rasters
//!
//! # Examples
//!
//! ## Segmenting an image
//!
//! ```
//! use gapseg_region::{Segmentation, SegmentationOptions};
//!
//! // Two blobs separated by a single background column
//! let mut seg = Segmentation::from_rows(&[
//!     [9u8, 9, 0, 9],
//!     [9, 9, 0, 9],
//! ])
//! .unwrap();
//!
//! // dist = 2 carries a path across one background pixel
//! let outputs = seg.run(&SegmentationOptions::new(2, 3)).unwrap();
//! assert_eq!(outputs.len(), 1);
//! assert_eq!(outputs[0].count_foreground(), 6);
//! ```
//!
//! ## Growing a single region
//!
//! ```
//! use gapseg_region::{VisitedSet, grow_region};
//! use gapseg_core::Raster;
//!
//! let image = Raster::from_rows(&[[1u8, 0, 0, 1]]).unwrap();
//! let mut visited = VisitedSet::new(image.len());
//! let segment = grow_region(&image, &mut visited, 0, 3);
//! assert_eq!(segment.indices(), &[0, 3]);
//! ```

pub mod coords;
pub mod error;
pub mod grow;
pub mod materialize;
pub mod neighbors;
pub mod scan;
pub mod segment;
pub mod segmentation;
pub mod visited;

// Re-export core types
pub use gapseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use coords::GridExtent;
pub use grow::grow_region;
pub use materialize::{segment_to_raster, segments_to_rasters};
pub use neighbors::{Neighbors, find_neighbors};
pub use scan::scan_segments;
pub use segment::Segment;
pub use segmentation::{DEFAULT_DIST, DEFAULT_MIN_SIZE, Segmentation, SegmentationOptions};
pub use visited::VisitedSet;
