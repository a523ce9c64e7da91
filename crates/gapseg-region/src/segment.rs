//! Segment - pixel indices collected by one growth

use std::ops::Index;

/// Pixel indices of one segment, in discovery order.
///
/// The first index is always the seed the growth started from. Order is
/// the order pixels were admitted by the growth, not geometric order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    indices: Vec<usize>,
}

impl Segment {
    /// Start a segment containing only `seed`.
    pub fn from_seed(seed: usize) -> Self {
        Self {
            indices: vec![seed],
        }
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    /// Seed index the segment was grown from.
    pub fn seed(&self) -> usize {
        self.indices[0]
    }

    /// Number of member pixels, counted literally.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`; a segment holds at least its seed.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Member indices in discovery order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate over member indices in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.indices.iter()
    }

    /// Whether `index` is a member.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Member indices in increasing order.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut sorted = self.indices.clone();
        sorted.sort_unstable();
        sorted
    }
}

impl Index<usize> for Segment {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.indices[i]
    }
}

impl<'a> IntoIterator for &'a Segment {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}

impl From<Segment> for Vec<usize> {
    fn from(segment: Segment) -> Self {
        segment.indices
    }
}
