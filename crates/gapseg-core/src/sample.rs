//! Numeric sample kinds
//!
//! A [`Raster`](crate::Raster) is generic over one sample kind. The only
//! property segmentation relies on is equality to zero: a zero sample is
//! background, anything else is foreground. Signed and floating kinds get
//! no special treatment beyond that (`-0.0` is background, `NaN` is
//! foreground).

use num_traits::{ToPrimitive, Zero};
use std::fmt::Debug;

/// A single-channel sample value.
///
/// Implemented for every `Copy` numeric type that has a zero and can be
/// converted to a primitive, which covers `u8`, `i8`, `u16`, `i16`, `u32`,
/// `i32`, `u64`, `i64`, `f32` and `f64`.
pub trait Sample: Copy + PartialEq + Zero + ToPrimitive + Debug + Send + Sync + 'static {
    /// Whether this sample is background (equal to zero).
    #[inline]
    fn is_background(&self) -> bool {
        self.is_zero()
    }

    /// Whether this sample is foreground (not equal to zero).
    #[inline]
    fn is_foreground(&self) -> bool {
        !self.is_background()
    }

    /// Sample as `f64`, for summaries and display.
    ///
    /// Values that cannot be represented map to `0.0`.
    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }
}

impl<T> Sample for T where T: Copy + PartialEq + Zero + ToPrimitive + Debug + Send + Sync + 'static {}
