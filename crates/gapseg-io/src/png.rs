//! PNG image format support
//!
//! Only single-channel PNGs are accepted. Grayscale samples are kept as
//! stored (a 1-bit image yields samples 0 and 1), indexed images must
//! carry a gray palette and are mapped to their gray levels.

use crate::{GrayImage, IoError, IoResult};
use gapseg_core::Raster;
use log::debug;
use png::{BitDepth, ColorType, Decoder, Transformations};
use std::io::{BufRead, Seek};

/// Unpack one sample of `bits` (1, 2, 4 or 8) from a packed row.
fn packed_sample(row: &[u8], x: usize, bits: usize) -> u8 {
    let per_byte = 8 / bits;
    let shift = 8 - bits * (x % per_byte + 1);
    let mask = ((1u16 << bits) - 1) as u8;
    (row[x / per_byte] >> shift) & mask
}

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<GrayImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    match color_type {
        ColorType::Grayscale | ColorType::Indexed => {}
        ColorType::GrayscaleAlpha => return Err(IoError::NotSingleChannel { channels: 2 }),
        ColorType::Rgb => return Err(IoError::NotSingleChannel { channels: 3 }),
        ColorType::Rgba => return Err(IoError::NotSingleChannel { channels: 4 }),
    }

    // Gray level per palette entry
    let levels = if color_type == ColorType::Indexed {
        let palette = info
            .palette
            .as_ref()
            .ok_or_else(|| IoError::InvalidData("indexed PNG without palette".to_string()))?;
        let mut levels = Vec::with_capacity(palette.len() / 3);
        for rgb in palette.chunks_exact(3) {
            if rgb[0] != rgb[1] || rgb[1] != rgb[2] {
                return Err(IoError::NotSingleChannel { channels: 3 });
            }
            levels.push(rgb[0]);
        }
        Some(levels)
    } else {
        None
    };

    debug!(
        "PNG {}x{} {:?} {:?}",
        width, height, color_type, bit_depth
    );

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let rows = data.chunks_exact(bytes_per_row).take(height as usize);

    if bit_depth == BitDepth::Sixteen {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            samples.extend(
                row.chunks_exact(2)
                    .take(width as usize)
                    .map(|c| u16::from_be_bytes([c[0], c[1]])),
            );
        }
        return Ok(GrayImage::Gray16(Raster::from_vec(width, height, samples)?));
    }

    let bits = bit_depth as usize;
    let mut samples = Vec::with_capacity(width as usize * height as usize);
    for row in rows {
        for x in 0..width as usize {
            let raw = packed_sample(row, x, bits);
            let value = match &levels {
                Some(levels) => *levels.get(usize::from(raw)).ok_or_else(|| {
                    IoError::InvalidData(format!(
                        "palette index {} out of range ({} colors)",
                        raw,
                        levels.len()
                    ))
                })?,
                None => raw,
            };
            samples.push(value);
        }
    }

    Ok(GrayImage::Gray8(Raster::from_vec(width, height, samples)?))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use png::Encoder;
    use std::io::Cursor;

    /// Encode raw PNG scanline data.
    pub(crate) fn encode_png(
        width: u32,
        height: u32,
        color: ColorType,
        depth: BitDepth,
        palette: Option<Vec<u8>>,
        data: &[u8],
    ) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            if let Some(palette) = palette {
                encoder.set_palette(palette);
            }
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_packed_sample() {
        let row = [0b1011_0010u8];
        assert_eq!(packed_sample(&row, 0, 1), 1);
        assert_eq!(packed_sample(&row, 1, 1), 0);
        assert_eq!(packed_sample(&row, 0, 2), 0b10);
        assert_eq!(packed_sample(&row, 3, 2), 0b10);
        assert_eq!(packed_sample(&row, 1, 4), 0b0010);
        assert_eq!(packed_sample(&row, 0, 8), 0b1011_0010);
    }

    #[test]
    fn test_read_gray8() {
        let data = [0u8, 5, 0, 7, 0, 9];
        let png = encode_png(3, 2, ColorType::Grayscale, BitDepth::Eight, None, &data);
        let GrayImage::Gray8(r) = read_png(Cursor::new(png)).unwrap() else {
            panic!("expected 8-bit image");
        };
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.data(), &data);
    }

    #[test]
    fn test_read_gray1_keeps_raw_values() {
        let png = encode_png(
            3,
            2,
            ColorType::Grayscale,
            BitDepth::One,
            None,
            &[0b1010_0000, 0b0100_0000],
        );
        let GrayImage::Gray8(r) = read_png(Cursor::new(png)).unwrap() else {
            panic!("expected 8-bit image");
        };
        assert_eq!(r.data(), &[1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_read_gray16() {
        let png = encode_png(
            2,
            1,
            ColorType::Grayscale,
            BitDepth::Sixteen,
            None,
            &[0x12, 0x34, 0x00, 0x00],
        );
        let GrayImage::Gray16(r) = read_png(Cursor::new(png)).unwrap() else {
            panic!("expected 16-bit image");
        };
        assert_eq!(r.data(), &[0x1234, 0]);
    }

    #[test]
    fn test_read_indexed_gray_palette() {
        let palette = vec![0, 0, 0, 128, 128, 128];
        let png = encode_png(
            2,
            1,
            ColorType::Indexed,
            BitDepth::Eight,
            Some(palette),
            &[1, 0],
        );
        let GrayImage::Gray8(r) = read_png(Cursor::new(png)).unwrap() else {
            panic!("expected 8-bit image");
        };
        assert_eq!(r.data(), &[128, 0]);
    }

    #[test]
    fn test_reject_multichannel() {
        let rgb = encode_png(1, 1, ColorType::Rgb, BitDepth::Eight, None, &[1, 2, 3]);
        assert!(matches!(
            read_png(Cursor::new(rgb)),
            Err(IoError::NotSingleChannel { channels: 3 })
        ));

        let ga = encode_png(1, 1, ColorType::GrayscaleAlpha, BitDepth::Eight, None, &[1, 255]);
        assert!(matches!(
            read_png(Cursor::new(ga)),
            Err(IoError::NotSingleChannel { channels: 2 })
        ));

        let palette = vec![0, 0, 0, 255, 0, 0];
        let indexed = encode_png(
            1,
            1,
            ColorType::Indexed,
            BitDepth::Eight,
            Some(palette),
            &[1],
        );
        assert!(matches!(
            read_png(Cursor::new(indexed)),
            Err(IoError::NotSingleChannel { channels: 3 })
        ));
    }

    #[test]
    fn test_reject_garbage() {
        assert!(matches!(
            read_png(Cursor::new(b"not a png".to_vec())),
            Err(IoError::DecodeError(_))
        ));
    }
}
