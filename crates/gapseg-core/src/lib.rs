//! gapseg Core - Basic data structures for single-channel segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! gapseg:
//!
//! - [`Raster`] - Single-channel image container, generic over the sample kind
//! - [`Sample`] - Numeric sample kinds (anything with a zero)
//! - [`Rect`] - Axis-aligned pixel rectangle
//! - [`Error`] / [`Result`] - Core error handling

pub mod error;
pub mod raster;
pub mod sample;

pub use error::{Error, Result};
pub use raster::{Raster, Rect};
pub use sample::Sample;
