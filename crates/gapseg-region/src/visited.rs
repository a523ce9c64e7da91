//! Visited marker set
//!
//! One flag per pixel recording that the pixel has entered some growth's
//! frontier. Marks are write-once: there is no way to clear a flag, and a
//! fresh set is created for every full image scan.

/// Dense write-once claim set keyed by linear pixel index.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    marks: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// Create a set with every pixel unvisited.
    pub fn new(len: usize) -> Self {
        Self {
            marks: vec![false; len],
            count: 0,
        }
    }

    /// Whether `index` has been claimed.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.marks[index]
    }

    /// Claim `index`. Returns `true` if it was not claimed before.
    #[inline]
    pub fn mark(&mut self, index: usize) -> bool {
        let slot = &mut self.marks[index];
        if *slot {
            return false;
        }
        *slot = true;
        self.count += 1;
        true
    }

    /// Number of claimed pixels.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of pixels tracked.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the image has no pixels to track.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
