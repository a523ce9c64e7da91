//! PNM (Portable Any Map) format support
//!
//! Reads the single-channel members of the family: PBM (P1 ASCII, P4
//! binary) and PGM (P2 ASCII, P5 binary). PBM ink (bit value 1) becomes
//! sample 1 on a 0 background. PGM with `maxval < 256` yields an 8-bit
//! raster, larger `maxval` a 16-bit one. PPM (P3/P6) is rejected as
//! multi-channel; PAM (P7) is not supported.

use crate::{GrayImage, IoError, IoResult};
use gapseg_core::Raster;
use log::debug;
use std::io::Read;

/// Byte cursor over a PNM stream.
struct PnmParser<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PnmParser<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments running to end of line.
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Next unsigned decimal number.
    fn number(&mut self, what: &str) -> IoResult<u32> {
        self.skip_separators();
        let start = self.pos;
        while self.data.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData(format!("PNM: expected {}", what)));
        }
        std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| IoError::InvalidData(format!("PNM: {} out of range", what)))
    }

    /// Next single `0`/`1` digit of a P1 raster; digits need not be separated.
    fn bit(&mut self) -> IoResult<u8> {
        self.skip_separators();
        match self.data.get(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                Ok(0)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(1)
            }
            _ => Err(IoError::InvalidData("PNM: expected bit".to_string())),
        }
    }

    /// Consume the single whitespace byte that ends a binary header.
    fn end_of_header(&mut self) -> IoResult<()> {
        match self.data.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(IoError::InvalidData(
                "PNM: missing separator after header".to_string(),
            )),
        }
    }

    fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

/// Read a PNM image from a reader.
///
/// # Returns
/// A [`GrayImage`]: 8-bit for PBM and PGM up to `maxval` 255, otherwise
/// 16-bit.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<GrayImage> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    read_pnm_mem(&data)
}

/// Read a PNM image from memory.
pub fn read_pnm_mem(data: &[u8]) -> IoResult<GrayImage> {
    if data.len() < 2 || data[0] != b'P' {
        return Err(IoError::InvalidData("not a PNM file".to_string()));
    }

    let kind = data[1];
    match kind {
        b'1' | b'2' | b'4' | b'5' => {}
        b'3' | b'6' => return Err(IoError::NotSingleChannel { channels: 3 }),
        b'7' => {
            return Err(IoError::UnsupportedFormat(
                "PAM (P7) is not supported".to_string(),
            ));
        }
        _ => return Err(IoError::InvalidData("unknown PNM magic".to_string())),
    }

    let mut p = PnmParser::new(&data[2..]);
    let width = p.number("width")?;
    let height = p.number("height")?;
    let maxval = match kind {
        b'1' | b'4' => 1,
        _ => p.number("maxval")?,
    };
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!(
            "PNM: maxval {} out of range",
            maxval
        )));
    }

    debug!(
        "PNM P{} {}x{} maxval {}",
        kind as char, width, height, maxval
    );

    if width == 0 || height == 0 {
        return Err(gapseg_core::Error::InvalidDimension { width, height }.into());
    }
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| IoError::InvalidData(format!("PNM: {}x{} is too large", width, height)))?;
    // ASCII rasters need at least one byte per sample
    if matches!(kind, b'1' | b'2') && len > p.remaining().len() {
        return Err(IoError::InvalidData("PNM: truncated data".to_string()));
    }

    match kind {
        b'1' => {
            let mut samples = Vec::with_capacity(len);
            for _ in 0..len {
                samples.push(p.bit()?);
            }
            Ok(GrayImage::Gray8(Raster::from_vec(width, height, samples)?))
        }
        b'2' => {
            let mut samples = Vec::with_capacity(len);
            for _ in 0..len {
                let v = p.number("sample")?;
                if v > maxval {
                    return Err(IoError::InvalidData(format!(
                        "PNM: sample {} exceeds maxval {}",
                        v, maxval
                    )));
                }
                samples.push(v);
            }
            gray_from_samples(width, height, maxval, samples.into_iter())
        }
        b'4' => {
            p.end_of_header()?;
            let stride = (width as usize).div_ceil(8);
            let body = p.remaining();
            if stride
                .checked_mul(height as usize)
                .is_none_or(|needed| body.len() < needed)
            {
                return Err(IoError::InvalidData("PNM: truncated data".to_string()));
            }
            let mut samples = Vec::with_capacity(len);
            for row in body.chunks_exact(stride).take(height as usize) {
                for x in 0..width as usize {
                    samples.push((row[x / 8] >> (7 - (x % 8))) & 1);
                }
            }
            Ok(GrayImage::Gray8(Raster::from_vec(width, height, samples)?))
        }
        _ => {
            p.end_of_header()?;
            let body = p.remaining();
            let bytes_per_sample = if maxval < 256 { 1 } else { 2 };
            if len
                .checked_mul(bytes_per_sample)
                .is_none_or(|needed| body.len() < needed)
            {
                return Err(IoError::InvalidData("PNM: truncated data".to_string()));
            }
            let samples: Vec<u32> = if bytes_per_sample == 1 {
                body[..len].iter().map(|&b| u32::from(b)).collect()
            } else {
                body[..len * 2]
                    .chunks_exact(2)
                    .map(|c| u32::from(u16::from_be_bytes([c[0], c[1]])))
                    .collect()
            };
            gray_from_samples(width, height, maxval, samples.into_iter())
        }
    }
}

fn gray_from_samples(
    width: u32,
    height: u32,
    maxval: u32,
    samples: impl Iterator<Item = u32>,
) -> IoResult<GrayImage> {
    if maxval < 256 {
        let data = samples.map(|v| v as u8).collect();
        Ok(GrayImage::Gray8(Raster::from_vec(width, height, data)?))
    } else {
        let data = samples.map(|v| v as u16).collect();
        Ok(GrayImage::Gray16(Raster::from_vec(width, height, data)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_p2_with_comments() {
        let data = b"P2\n# a comment\n3 2\n# another\n255\n0 10 0\n200 0 5\n";
        let GrayImage::Gray8(r) = read_pnm_mem(data).unwrap() else {
            panic!("expected 8-bit image");
        };
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.data(), &[0, 10, 0, 200, 0, 5]);
    }

    #[test]
    fn test_read_p5() {
        let mut data = b"P5 2 2 255\n".to_vec();
        data.extend_from_slice(&[0, 7, 9, 0]);
        let GrayImage::Gray8(r) = read_pnm(&data[..]).unwrap() else {
            panic!("expected 8-bit image");
        };
        assert_eq!(r.data(), &[0, 7, 9, 0]);
    }

    #[test]
    fn test_read_p5_16bit() {
        let mut data = b"P5\n2 1\n65535\n".to_vec();
        data.extend_from_slice(&[0x01, 0x02, 0x00, 0x00]);
        let GrayImage::Gray16(r) = read_pnm_mem(&data).unwrap() else {
            panic!("expected 16-bit image");
        };
        assert_eq!(r.data(), &[0x0102, 0]);
    }

    #[test]
    fn test_read_p1_and_p4() {
        let GrayImage::Gray8(r) = read_pnm_mem(b"P1\n3 2\n1 0 1\n011\n").unwrap() else {
            panic!("expected 8-bit image");
        };
        assert_eq!(r.data(), &[1, 0, 1, 0, 1, 1]);

        let mut data = b"P4\n3 2\n".to_vec();
        data.extend_from_slice(&[0b1010_0000, 0b0110_0000]);
        let GrayImage::Gray8(r) = read_pnm_mem(&data).unwrap() else {
            panic!("expected 8-bit image");
        };
        assert_eq!(r.data(), &[1, 0, 1, 0, 1, 1]);
    }

    #[test]
    fn test_reject_ppm() {
        assert!(matches!(
            read_pnm_mem(b"P6\n1 1\n255\n\x00\x00\x00"),
            Err(IoError::NotSingleChannel { channels: 3 })
        ));
        assert!(matches!(
            read_pnm_mem(b"P3\n1 1\n255\n0 0 0\n"),
            Err(IoError::NotSingleChannel { channels: 3 })
        ));
    }

    #[test]
    fn test_reject_bad_data() {
        assert!(matches!(
            read_pnm_mem(b"P5\n4 4\n255\n\x00\x00"),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pnm_mem(b"P2\n1 1\n10\n11\n"),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pnm_mem(b"P2\n1 1\n0\n0\n"),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pnm_mem(b"P7\n"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_reject_zero_size() {
        assert!(matches!(
            read_pnm_mem(b"P2\n0 3\n255\n"),
            Err(IoError::Core(gapseg_core::Error::InvalidDimension { .. }))
        ));
        assert!(matches!(
            read_pnm_mem(b"P4\n0 5\n"),
            Err(IoError::Core(gapseg_core::Error::InvalidDimension { .. }))
        ));
        assert!(matches!(
            read_pnm_mem(b"P1\n3 0\n"),
            Err(IoError::Core(gapseg_core::Error::InvalidDimension { .. }))
        ));
    }

    #[test]
    fn test_reject_oversized_header() {
        assert!(matches!(
            read_pnm_mem(b"P2\n4000000000 4000000000\n255\n1\n"),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pnm_mem(b"P5\n4294967295 4294967295\n65535\n\0\0"),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pnm_mem(b"P4\n4294967295 4294967295\n\0"),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pnm_mem(b"P1\n1000 1000\n1 0 1\n"),
            Err(IoError::InvalidData(_))
        ));
    }
}
