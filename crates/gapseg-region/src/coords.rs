//! Coordinate mapping
//!
//! Converts between a linear pixel index and its `(row, col)` pair for a
//! fixed image extent. Row-major order (`index = col + row * width`) is the
//! canonical scan order used throughout the crate.

use gapseg_core::{Raster, Sample};

/// Width and height of the grid being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtent {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl GridExtent {
    /// Create a new extent.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Extent of an existing raster.
    pub fn of<T: Sample>(raster: &Raster<T>) -> Self {
        Self::new(raster.width() as usize, raster.height() as usize)
    }

    /// Number of pixels covered by the extent.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the extent covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Linear index to `(row, col)`.
    ///
    /// No range validation; callers pass in-bounds indices.
    #[inline]
    pub fn linear_to_rc(&self, ptr: usize) -> (usize, usize) {
        (ptr / self.width, ptr % self.width)
    }

    /// `(row, col)` to linear index.
    ///
    /// No range validation; callers pass in-bounds coordinates.
    #[inline]
    pub fn rc_to_linear(&self, row: usize, col: usize) -> usize {
        col + row * self.width
    }

    /// Whether a signed `(row, col)` pair lies inside the extent.
    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_rc() {
        let e = GridExtent::new(4, 3);
        assert_eq!(e.linear_to_rc(0), (0, 0));
        assert_eq!(e.linear_to_rc(3), (0, 3));
        assert_eq!(e.linear_to_rc(4), (1, 0));
        assert_eq!(e.linear_to_rc(11), (2, 3));
    }

    #[test]
    fn test_rc_to_linear_inverse() {
        let e = GridExtent::new(7, 5);
        for ptr in 0..e.len() {
            let (row, col) = e.linear_to_rc(ptr);
            assert_eq!(e.rc_to_linear(row, col), ptr);
        }
    }

    #[test]
    fn test_contains() {
        let e = GridExtent::new(2, 2);
        assert!(e.contains(0, 0));
        assert!(e.contains(1, 1));
        assert!(!e.contains(-1, 0));
        assert!(!e.contains(0, 2));
        assert!(!e.contains(2, 0));
    }

    #[test]
    fn test_of_raster() {
        let r = Raster::<u8>::new(6, 2).unwrap();
        let e = GridExtent::of(&r);
        assert_eq!(e, GridExtent::new(6, 2));
        assert_eq!(e.len(), 12);
        assert!(!e.is_empty());
    }
}
