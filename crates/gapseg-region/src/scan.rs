//! Full-image scan
//!
//! Walks the image in row-major order and launches a growth at every
//! foreground pixel, collecting one segment per launch.

use crate::grow::grow_region;
use crate::segment::Segment;
use crate::visited::VisitedSet;
use gapseg_core::{Raster, Sample};
use log::{debug, trace};

/// Partition an image into gap-tolerant segments.
///
/// A growth is launched at every foreground pixel, including pixels an
/// earlier growth already claimed: being claimed only hides a pixel from
/// later neighbor lookups, it does not stop it from seeding. Such a seed has
/// no unclaimed neighbors after it, so it yields a single-pixel segment.
///
/// # Arguments
///
/// * `image` - Source raster
/// * `dist` - Gap tolerance passed to every growth
///
/// # Returns
///
/// Segments in seed scan order.
pub fn scan_segments<T: Sample>(image: &Raster<T>, dist: u32) -> Vec<Segment> {
    let mut visited = VisitedSet::new(image.len());
    let mut segments = Vec::new();

    for seed in image.foreground_indices() {
        let segment = grow_region(image, &mut visited, seed, dist);
        trace!("seed {}: {} pixels", seed, segment.len());
        segments.push(segment);
    }

    debug!(
        "scanned {}x{} image with dist={}: {} segments, {} pixels claimed",
        image.width(),
        image.height(),
        dist,
        segments.len(),
        visited.count()
    );

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_background() {
        let image = Raster::<u8>::new(5, 5).unwrap();
        assert!(scan_segments(&image, 3).is_empty());
    }

    #[test]
    fn test_claimed_pixels_still_seed() {
        // 1 x 3 strip of foreground: seed 0 collects everything, seeds 1
        // and 2 then produce single-pixel segments
        let image = Raster::from_rows(&[[4u8, 4, 4]]).unwrap();
        let segments = scan_segments(&image, 0);
        let sizes: Vec<usize> = segments.iter().map(Segment::len).collect();
        assert_eq!(sizes, vec![3, 1, 1]);
        let seeds: Vec<usize> = segments.iter().map(Segment::seed).collect();
        assert_eq!(seeds, vec![0, 1, 2]);
    }

    #[test]
    fn test_segments_in_scan_order() {
        let image = Raster::from_rows(&[[0u8, 0, 0, 2], [0, 0, 0, 0], [3, 0, 0, 0]]).unwrap();
        let segments = scan_segments(&image, 1);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].indices(), &[3]);
        assert_eq!(segments[1].indices(), &[8]);
    }
}
