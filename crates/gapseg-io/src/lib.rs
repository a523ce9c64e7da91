//! gapseg-io - Single-channel image loading
//!
//! Decodes image files into single-channel rasters for segmentation:
//!
//! - **BMP** - uncompressed, gray palette (1/4/8 bpp)
//! - **PNG** - grayscale (1/2/4/8/16 bit) or indexed with a gray palette
//! - **PNM** - PBM (P1/P4) and PGM (P2/P5)
//!
//! Color or alpha images are rejected with [`IoError::NotSingleChannel`].
//!
//! # Examples
//!
//! ```
//! use gapseg_io::{GrayImage, read_image_mem};
//!
//! let image = read_image_mem(b"P2\n2 1\n255\n0 42\n").unwrap();
//! assert_eq!(image.depth_bits(), 8);
//! let GrayImage::Gray8(raster) = image else { unreachable!() };
//! assert_eq!(raster.data(), &[0, 42]);
//! ```

pub mod error;
pub mod format;

#[cfg(feature = "bmp")]
pub mod bmp;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use gapseg_core::Raster;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// A decoded single-channel image.
///
/// The variant follows the sample depth stored in the file.
#[derive(Debug, Clone, PartialEq)]
pub enum GrayImage {
    /// Samples of at most 8 bits
    Gray8(Raster<u8>),
    /// 16-bit samples
    Gray16(Raster<u16>),
}

impl GrayImage {
    /// Image width in pixels
    pub fn width(&self) -> u32 {
        match self {
            Self::Gray8(r) => r.width(),
            Self::Gray16(r) => r.width(),
        }
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        match self {
            Self::Gray8(r) => r.height(),
            Self::Gray16(r) => r.height(),
        }
    }

    /// Bits per sample of the raster kind (8 or 16)
    pub fn depth_bits(&self) -> u32 {
        match self {
            Self::Gray8(_) => 8,
            Self::Gray16(_) => 16,
        }
    }
}

/// Read an image from a file path.
///
/// The format is detected from the file's magic bytes, not its extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    debug!("Reading {} as {:?}", path.display(), format);

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::read_bmp(reader),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} images are not supported",
            other
        ))),
    }
}

/// Read an image from memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<GrayImage> {
    let format = detect_format_from_bytes(data)?;
    debug!("Reading {} bytes as {:?}", data.len(), format);

    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::read_bmp(Cursor::new(data)),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm_mem(data),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} images are not supported",
            other
        ))),
    }
}
