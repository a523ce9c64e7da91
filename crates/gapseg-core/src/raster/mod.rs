//! Raster - single-channel sample grid
//!
//! `Raster<T>` is the image type shared by every gapseg crate. It stores
//! `width * height` samples of one numeric kind in row-major order, so the
//! sample at column `x`, row `y` lives at linear index `x + y * width`.
//!
//! # Ownership model
//!
//! A `Raster` owns its samples outright. Cloning copies the buffer; a
//! raster produced from another (for instance a segment mask) shares no
//! storage with its source.

mod access;

use crate::error::{Error, Result};
use crate::sample::Sample;

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Width in pixels
    pub w: u32,
    /// Height in pixels
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rightmost column contained in the rectangle.
    pub fn right(&self) -> u32 {
        self.x + self.w - 1
    }

    /// Bottom row contained in the rectangle.
    pub fn bottom(&self) -> u32 {
        self.y + self.h - 1
    }
}

/// Single-channel image container
///
/// # Examples
///
/// ```
/// use gapseg_core::Raster;
///
/// let raster = Raster::<u8>::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.count_foreground(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T: Sample> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Sample> Raster<T> {
    /// Create a new background-filled raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![T::zero(); len],
        })
    }

    /// Create a raster from a row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::DataLength`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a raster from a grid of equal-length rows.
    ///
    /// The outer vector holds rows top to bottom; each row holds samples
    /// left to right.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if there are no rows or the rows are empty
    /// - [`Error::RaggedRows`] if any row differs in length from the first
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let (w32, h32) = (
            u32::try_from(width).unwrap_or(u32::MAX),
            u32::try_from(height).unwrap_or(u32::MAX),
        );
        check_dimensions(w32, h32)?;

        let mut data = Vec::with_capacity(width * height);
        for (row, samples) in rows.iter().enumerate() {
            let samples = samples.as_ref();
            if samples.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    actual: samples.len(),
                });
            }
            data.extend_from_slice(samples);
        }

        Self::from_vec(w32, h32, data)
    }

    /// Create a background-filled raster with the same extent as `self`.
    pub fn create_template(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: vec![T::zero(); self.data.len()],
        }
    }

    /// Width in pixels (number of columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of samples (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; a raster has at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable samples in row-major order.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Number of foreground (non-zero) samples.
    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|s| s.is_foreground()).count()
    }

    /// Linear indices of all foreground samples, in row-major order.
    pub fn foreground_indices(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_foreground())
            .map(|(i, _)| i)
            .collect()
    }

    /// Bounding box of the foreground, or `None` for an all-background raster.
    pub fn bounding_box(&self) -> Option<Rect> {
        let width = self.width as usize;
        let mut bounds: Option<(u32, u32, u32, u32)> = None;

        for (i, s) in self.data.iter().enumerate() {
            if s.is_background() {
                continue;
            }
            let x = (i % width) as u32;
            let y = (i / width) as u32;
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }

        bounds.map(|(x0, y0, x1, y1)| Rect::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1))
    }

    /// Largest sample magnitude, as `f64`; `0.0` for an all-background raster.
    pub fn peak_magnitude(&self) -> f64 {
        self.data
            .iter()
            .map(|s| s.to_f64_lossy().abs())
            .fold(0.0, f64::max)
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}
