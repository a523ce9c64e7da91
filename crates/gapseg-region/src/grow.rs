//! Gap-tolerant region growing
//!
//! Grows one segment from a seed pixel with a last-in-first-out frontier of
//! `(pixel, gap budget)` pairs. Crossing a foreground pixel resets the path's
//! budget to the full `dist`; each consecutive background pixel costs one
//! unit, and a background pixel is only kept on the frontier while the
//! remaining budget stays above zero. Background pixels never join the
//! segment.
//!
//! The budget belongs to the path, not the segment. Because claiming a
//! pixel is irreversible and the frontier is LIFO, a pixel first reached by
//! a low-budget path stays claimed even when a later path with more budget
//! would have carried the growth further through it.

use crate::coords::GridExtent;
use crate::neighbors::find_neighbors;
use crate::segment::Segment;
use crate::visited::VisitedSet;
use gapseg_core::{Raster, Sample};

/// Grow a single segment from `seed`.
///
/// Every neighbor returned by the lookup is claimed in `visited` before its
/// value is inspected, so no pixel is offered twice within or across
/// growths of the same scan.
///
/// # Arguments
///
/// * `image` - Source raster
/// * `visited` - Claim set shared by every growth of the current scan
/// * `seed` - Linear index of the seed pixel
/// * `dist` - Gap tolerance; the budget a path restarts with on foreground
///
/// # Returns
///
/// The seed followed by every foreground pixel admitted, in discovery order.
pub fn grow_region<T: Sample>(
    image: &Raster<T>,
    visited: &mut VisitedSet,
    seed: usize,
    dist: u32,
) -> Segment {
    let extent = GridExtent::of(image);
    let mut segment = Segment::from_seed(seed);
    let mut frontier: Vec<(usize, u32)> = vec![(seed, dist)];

    while let Some((ptr, budget)) = frontier.pop() {
        let neighbors = find_neighbors(extent, visited, ptr, seed);
        for &n in neighbors.iter() {
            visited.mark(n);
        }

        for &n in neighbors.iter() {
            if image.sample_unchecked(n).is_foreground() {
                frontier.push((n, dist));
                segment.push(n);
            } else if budget > 1 {
                frontier.push((n, budget - 1));
            }
        }
    }

    segment
}
