//! Segmentation handle
//!
//! [`Segmentation`] owns one image and the state derived from it: the
//! partition produced by a full scan, and the rasters materialized from
//! that partition. Each operation either completes and replaces the derived
//! state, or fails and leaves it untouched.

use crate::error::{RegionError, RegionResult};
use crate::materialize::segments_to_rasters;
use crate::scan::scan_segments;
use crate::segment::Segment;
use gapseg_core::{Raster, Sample};

/// Default gap tolerance
pub const DEFAULT_DIST: u32 = 10;

/// Default minimum segment size, in pixels
pub const DEFAULT_MIN_SIZE: usize = 100;

/// Options for a complete segmentation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationOptions {
    /// Gap tolerance: the budget a growth path restarts with on every
    /// foreground pixel
    pub dist: u32,
    /// Minimum number of pixels for a segment to be materialized
    pub min_size: usize,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            dist: DEFAULT_DIST,
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

impl SegmentationOptions {
    /// Create new options
    pub fn new(dist: u32, min_size: usize) -> Self {
        Self { dist, min_size }
    }

    /// Create options from signed values, as parsed from user input.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if either value is
    /// negative or does not fit the target type.
    pub fn try_new(dist: i64, min_size: i64) -> RegionResult<Self> {
        let dist = u32::try_from(dist).map_err(|_| {
            RegionError::InvalidParameters(format!(
                "dist must be in 0..={}, got {}",
                u32::MAX,
                dist
            ))
        })?;
        let min_size = usize::try_from(min_size).map_err(|_| {
            RegionError::InvalidParameters(format!("min_size must be >= 0, got {}", min_size))
        })?;
        Ok(Self { dist, min_size })
    }

    /// Set the gap tolerance
    pub fn with_dist(mut self, dist: u32) -> Self {
        self.dist = dist;
        self
    }

    /// Set the minimum segment size
    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }
}

/// Region-growing segmentation of one image
///
/// # Examples
///
/// ```
/// use gapseg_region::Segmentation;
///
/// let mut seg = Segmentation::from_rows(&[
///     [5u8, 0, 0, 0],
///     [0, 5, 0, 0],
///     [0, 0, 5, 0],
///     [0, 0, 0, 5],
/// ])
/// .unwrap();
///
/// seg.find_all_segments(1);
/// seg.convert_segments_to_img(2).unwrap();
///
/// let outputs = seg.segments_img();
/// assert_eq!(outputs.len(), 1);
/// assert_eq!(outputs[0].count_foreground(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Segmentation<T: Sample> {
    image: Raster<T>,
    segments: Option<Vec<Segment>>,
    outputs: Vec<Raster<T>>,
}

impl<T: Sample> Segmentation<T> {
    /// Take ownership of an image.
    pub fn new(image: Raster<T>) -> Self {
        Self {
            image,
            segments: None,
            outputs: Vec::new(),
        }
    }

    /// Build a segmentation from a grid of equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidImage`] if the grid has no rows, no
    /// columns, or rows of differing lengths.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> RegionResult<Self> {
        let image = Raster::from_rows(rows)?;
        Ok(Self::new(image))
    }

    /// The image being segmented.
    pub fn image(&self) -> &Raster<T> {
        &self.image
    }

    /// Consume the handle, returning the image.
    pub fn into_image(self) -> Raster<T> {
        self.image
    }

    /// Scan the whole image and replace the partition.
    ///
    /// Every call is an independent run with its own claim set; segments
    /// and rasters from a previous run are discarded. `dist = 0` disables
    /// gap crossing.
    pub fn find_all_segments(&mut self, dist: u32) {
        let segments = scan_segments(&self.image, dist);
        self.segments = Some(segments);
        self.outputs.clear();
    }

    /// Materialize every segment with at least `min_size` pixels.
    ///
    /// Replaces the current set of output rasters.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::Precondition`] if [`find_all_segments`] has
    /// not run yet.
    ///
    /// [`find_all_segments`]: Segmentation::find_all_segments
    pub fn convert_segments_to_img(&mut self, min_size: usize) -> RegionResult<()> {
        let segments = self.segments.as_deref().ok_or(RegionError::Precondition(
            "find_all_segments must run before convert_segments_to_img",
        ))?;
        self.outputs = segments_to_rasters(&self.image, segments, min_size);
        Ok(())
    }

    /// Scan and materialize in one step.
    pub fn run(&mut self, options: &SegmentationOptions) -> RegionResult<&[Raster<T>]> {
        self.find_all_segments(options.dist);
        self.convert_segments_to_img(options.min_size)?;
        Ok(&self.outputs)
    }

    /// Materialized rasters, in seed scan order; empty if none retained.
    pub fn segments_img(&self) -> &[Raster<T>] {
        &self.outputs
    }

    /// Take the materialized rasters, leaving none retained.
    pub fn take_segments_img(&mut self) -> Vec<Raster<T>> {
        std::mem::take(&mut self.outputs)
    }

    /// The partition from the last scan; empty if no scan has run.
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_deref().unwrap_or(&[])
    }

    /// Number of segments in the partition.
    pub fn segment_count(&self) -> usize {
        self.segments().len()
    }

    /// Whether a scan has populated the partition.
    pub fn has_segments(&self) -> bool {
        self.segments.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = SegmentationOptions::default();
        assert_eq!(opts.dist, 10);
        assert_eq!(opts.min_size, 100);

        let opts = SegmentationOptions::default().with_dist(2).with_min_size(5);
        assert_eq!(opts, SegmentationOptions::new(2, 5));
    }

    #[test]
    fn test_try_new_rejects_negative() {
        assert_eq!(
            SegmentationOptions::try_new(3, 7).unwrap(),
            SegmentationOptions::new(3, 7)
        );
        assert!(matches!(
            SegmentationOptions::try_new(-1, 7),
            Err(RegionError::InvalidParameters(_))
        ));
        assert!(matches!(
            SegmentationOptions::try_new(3, -7),
            Err(RegionError::InvalidParameters(_))
        ));
        assert!(matches!(
            SegmentationOptions::try_new(i64::from(u32::MAX) + 1, 0),
            Err(RegionError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_from_rows_invalid() {
        let ragged = Segmentation::from_rows(&[vec![1u8, 2], vec![3]]);
        assert!(matches!(ragged, Err(RegionError::InvalidImage(_))));

        let empty: Vec<Vec<u8>> = Vec::new();
        assert!(matches!(
            Segmentation::from_rows(&empty),
            Err(RegionError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_convert_before_find_fails() {
        let mut seg = Segmentation::from_rows(&[[1u8, 1]]).unwrap();
        assert_eq!(
            seg.convert_segments_to_img(0),
            Err(RegionError::Precondition(
                "find_all_segments must run before convert_segments_to_img"
            ))
        );
        assert!(seg.segments_img().is_empty());
        assert!(!seg.has_segments());
        assert!(seg.segments().is_empty());
    }

    #[test]
    fn test_rescan_replaces_state() {
        let mut seg = Segmentation::from_rows(&[[1u8, 0, 1]]).unwrap();

        // [0, 2] plus the re-seeded single pixel [2]
        seg.find_all_segments(2);
        assert_eq!(seg.segment_count(), 2);
        assert_eq!(seg.segments()[0].indices(), &[0, 2]);
        seg.convert_segments_to_img(2).unwrap();
        assert_eq!(seg.segments_img().len(), 1);

        // A fresh run with no gap tolerance splits the pixels and drops the
        // previous outputs
        seg.find_all_segments(0);
        assert_eq!(seg.segment_count(), 2);
        assert!(seg.segments_img().is_empty());
        seg.convert_segments_to_img(2).unwrap();
        assert!(seg.segments_img().is_empty());
        seg.convert_segments_to_img(1).unwrap();
        assert_eq!(seg.segments_img().len(), 2);
    }

    #[test]
    fn test_run_and_take() {
        let mut seg = Segmentation::from_rows(&[[3i32, 0, 0, 3]]).unwrap();
        let outputs = seg.run(&SegmentationOptions::new(3, 2)).unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].data(), &[3, 0, 0, 3]);

        let taken = seg.take_segments_img();
        assert_eq!(taken.len(), 1);
        assert!(seg.segments_img().is_empty());
        assert_eq!(seg.into_image().data(), &[3, 0, 0, 3]);
    }
}
