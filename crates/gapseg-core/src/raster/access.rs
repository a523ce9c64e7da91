//! Sample access functions
//!
//! Low-level functions for getting and setting individual samples, either
//! by `(x, y)` coordinate (column, row) or by row-major linear index.

use super::Raster;
use crate::error::{Error, Result};
use crate::sample::Sample;

impl<T: Sample> Raster<T> {
    /// Linear index of `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(x as usize + y as usize * self.width as usize)
        } else {
            None
        }
    }

    /// Get the sample at `(x, y)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<T> {
        self.index_of(x, y).map(|i| self.data[i])
    }

    /// Get the sample at `(x, y)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> T {
        self.data[x as usize + y as usize * self.width as usize]
    }

    /// Set the sample at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: T) -> Result<()> {
        let index = self.index_of(x, y).ok_or(Error::IndexOutOfBounds {
            index: x as usize + y as usize * self.width as usize,
            len: self.data.len(),
        })?;
        self.data[index] = val;
        Ok(())
    }

    /// Get the sample at a linear index.
    #[inline]
    pub fn sample(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Get the sample at a linear index without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn sample_unchecked(&self, index: usize) -> T {
        self.data[index]
    }

    /// Set the sample at a linear index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn set_sample(&mut self, index: usize, val: T) -> Result<()> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = val;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut r = Raster::<i16>::new(4, 3).unwrap();
        r.set_pixel(3, 2, -7).unwrap();
        assert_eq!(r.get_pixel(3, 2), Some(-7));
        assert_eq!(r.get_pixel_unchecked(3, 2), -7);
        assert_eq!(r.sample(3 + 2 * 4), Some(-7));
        assert_eq!(r.get_pixel(4, 0), None);
        assert_eq!(r.get_pixel(0, 3), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut r = Raster::<u8>::new(2, 2).unwrap();
        assert!(matches!(
            r.set_pixel(2, 0, 1),
            Err(Error::IndexOutOfBounds { len: 4, .. })
        ));
    }

    #[test]
    fn test_linear_access() {
        let mut r = Raster::<f64>::new(3, 3).unwrap();
        r.set_sample(4, 0.5).unwrap();
        assert_eq!(r.get_pixel(1, 1), Some(0.5));
        assert_eq!(r.sample_unchecked(4), 0.5);
        assert_eq!(r.sample(9), None);
        assert_eq!(
            r.set_sample(9, 1.0),
            Err(Error::IndexOutOfBounds { index: 9, len: 9 })
        );
    }

    #[test]
    fn test_index_of() {
        let r = Raster::<u8>::new(5, 2).unwrap();
        assert_eq!(r.index_of(0, 0), Some(0));
        assert_eq!(r.index_of(4, 1), Some(9));
        assert_eq!(r.index_of(5, 1), None);
    }
}
