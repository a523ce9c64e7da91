//! Segment materialization
//!
//! Renders each sufficiently large segment as its own raster: background
//! everywhere except at the segment's member pixels, which carry the
//! source image's samples.

use crate::segment::Segment;
use gapseg_core::{Raster, Sample};
use log::debug;

/// Render a single segment as a masked copy of `image`.
pub fn segment_to_raster<T: Sample>(image: &Raster<T>, segment: &Segment) -> Raster<T> {
    let mut out = image.create_template();
    let src = image.data();
    let dst = out.data_mut();
    for &index in segment {
        dst[index] = src[index];
    }
    out
}

/// Render every segment with at least `min_size` pixels.
///
/// Segment sizes are counted literally. Output order follows the order of
/// `segments`; smaller segments are dropped without a placeholder.
pub fn segments_to_rasters<T: Sample>(
    image: &Raster<T>,
    segments: &[Segment],
    min_size: usize,
) -> Vec<Raster<T>> {
    let rasters: Vec<Raster<T>> = segments
        .iter()
        .filter(|s| s.len() >= min_size)
        .map(|s| segment_to_raster(image, s))
        .collect();

    debug!(
        "materialized {} of {} segments (min_size={})",
        rasters.len(),
        segments.len(),
        min_size
    );

    rasters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_segments;

    #[test]
    fn test_segment_to_raster_copies_members() {
        let image = Raster::from_rows(&[[9u8, 0, 7], [0, 0, 0], [5, 0, 0]]).unwrap();
        let mut segment = Segment::from_seed(0);
        segment.push(2);
        let out = segment_to_raster(&image, &segment);
        assert_eq!(out.data(), &[9, 0, 7, 0, 0, 0, 0, 0, 0]);
        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 3);
    }

    #[test]
    fn test_min_size_filter() {
        let image = Raster::from_rows(&[[1u16, 1, 0, 0, 0, 6]]).unwrap();
        let segments = scan_segments(&image, 0);
        // [0, 1], [1], [5]
        assert_eq!(segments.len(), 3);

        assert_eq!(segments_to_rasters(&image, &segments, 0).len(), 3);
        assert_eq!(segments_to_rasters(&image, &segments, 1).len(), 3);

        let kept = segments_to_rasters(&image, &segments, 2);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].data(), &[1, 1, 0, 0, 0, 0]);

        assert!(segments_to_rasters(&image, &segments, 3).is_empty());
    }
}
