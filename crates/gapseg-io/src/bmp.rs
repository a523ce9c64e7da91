//! BMP image format support
//!
//! Reads uncompressed Windows Bitmap (BMP) files with a gray palette
//! (1, 4 or 8 bits per pixel). Each palette index is replaced by its gray
//! level, so the result is an 8-bit single-channel raster. True-color and
//! colored-palette bitmaps are rejected.

use crate::{GrayImage, IoError, IoResult};
use gapseg_core::Raster;
use log::debug;
use std::io::Read;

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

fn le_u16(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn le_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

fn skip<R: Read>(reader: &mut R, n: usize) -> IoResult<()> {
    if n > 0 {
        let mut buf = vec![0u8; n];
        reader.read_exact(&mut buf)?;
    }
    Ok(())
}

/// Read a BMP image
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<GrayImage> {
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    let pixel_offset = le_u32(&file_header, 10) as usize;

    let mut info_header = [0u8; BMP_INFO_HEADER_SIZE as usize];
    reader.read_exact(&mut info_header)?;

    let header_size = le_u32(&info_header, 0);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_u32(&info_header, 4) as i32;
    let height = le_u32(&info_header, 8) as i32;

    let planes = le_u16(&info_header, 12);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = le_u16(&info_header, 14);
    let compression = le_u32(&info_header, 16);
    let colors_used = le_u32(&info_header, 32) as usize;

    match bits_per_pixel {
        1 | 4 | 8 => {}
        24 => return Err(IoError::NotSingleChannel { channels: 3 }),
        32 => return Err(IoError::NotSingleChannel { channels: 4 }),
        other => return Err(IoError::UnsupportedDepth(u32::from(other))),
    }

    if compression != 0 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    // Palette: BGRX quads, gray only
    let max_colors = 1usize << bits_per_pixel;
    let num_colors = if colors_used > 0 {
        colors_used.min(max_colors)
    } else {
        max_colors
    };
    skip(&mut reader, header_size as usize - BMP_INFO_HEADER_SIZE as usize)?;

    let mut palette = vec![0u8; num_colors * 4];
    reader.read_exact(&mut palette)?;

    let mut levels = Vec::with_capacity(num_colors);
    for quad in palette.chunks_exact(4) {
        let (b, g, r) = (quad[0], quad[1], quad[2]);
        if r != g || g != b {
            return Err(IoError::NotSingleChannel { channels: 3 });
        }
        levels.push(r);
    }

    let current_pos = BMP_FILE_HEADER_SIZE + header_size as usize + palette.len();
    if pixel_offset > current_pos {
        skip(&mut reader, pixel_offset - current_pos)?;
    }

    debug!(
        "BMP {}x{} {} bpp, {} gray levels",
        width, height, bits_per_pixel, num_colors
    );

    let mut raster = Raster::<u8>::new(width, height)?;

    // BMP rows are 4-byte aligned
    let row_stride = (width as usize * bits_per_pixel as usize).div_ceil(32) * 4;
    let mut row_buffer = vec![0u8; row_stride];

    for row in 0..height {
        reader.read_exact(&mut row_buffer)?;

        let y = if top_down { row } else { height - 1 - row };

        for x in 0..width {
            let index = usize::from(match bits_per_pixel {
                1 => (row_buffer[(x / 8) as usize] >> (7 - (x % 8))) & 1,
                4 => {
                    let byte = row_buffer[(x / 2) as usize];
                    if x % 2 == 0 { byte >> 4 } else { byte & 0xF }
                }
                _ => row_buffer[x as usize],
            });

            let level = *levels.get(index).ok_or_else(|| {
                IoError::InvalidData(format!(
                    "palette index {} out of range ({} colors)",
                    index, num_colors
                ))
            })?;
            raster.set_pixel(x, y, level)?;
        }
    }

    Ok(GrayImage::Gray8(raster))
}
