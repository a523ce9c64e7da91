//! Neighbor lookup for region growing
//!
//! Enumerates the Moore neighborhood (radius 1, excluding the pixel itself)
//! of a pixel, keeping only neighbors that are in bounds, lie strictly after
//! the current growth's seed in scan order, and have not been claimed yet.
//!
//! Neighbors are produced in increasing linear-index order (row above left
//! to right, then the same row, then the row below).

use crate::coords::GridExtent;
use crate::visited::VisitedSet;
use std::ops::Deref;

/// Relative `(row, col)` offsets of the 8-neighborhood in scan order.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Up to eight neighbor indices, stored inline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    buf: [usize; 8],
    len: usize,
}

impl Neighbors {
    fn push(&mut self, index: usize) {
        self.buf[self.len] = index;
        self.len += 1;
    }
}

impl Deref for Neighbors {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.buf[..self.len]
    }
}

/// Find the unclaimed, in-bounds neighbors of `ptr` that come after `seed`.
///
/// Lookup has no side effects; the caller marks returned neighbors as
/// visited before examining them.
///
/// # Arguments
///
/// * `extent` - Grid dimensions
/// * `visited` - Claim set for the current scan
/// * `ptr` - Linear index of the pixel being expanded
/// * `seed` - Linear index of the seed of the growth in progress
pub fn find_neighbors(
    extent: GridExtent,
    visited: &VisitedSet,
    ptr: usize,
    seed: usize,
) -> Neighbors {
    let (row, col) = extent.linear_to_rc(ptr);
    let mut out = Neighbors::default();

    for (dr, dc) in MOORE_OFFSETS {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if !extent.contains(r, c) {
            continue;
        }

        let n = extent.rc_to_linear(r as usize, c as usize);
        // Everything at or before the seed is settled by an earlier growth
        if n <= seed || visited.contains(n) {
            continue;
        }

        out.push(n);
    }

    out
}
