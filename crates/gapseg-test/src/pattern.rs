//! ASCII-art rasters
//!
//! Each pattern row is one image row. `.` is background, a digit `1`-`9`
//! is that sample value, and `#` is 255.

use crate::error::{TestError, TestResult};
use gapseg_core::Raster;

/// Build an 8-bit raster from pattern rows.
///
/// # Errors
///
/// Returns [`TestError::InvalidPattern`] for an unknown character, or
/// [`TestError::Raster`] if the rows are empty or of differing lengths.
pub fn raster_from_pattern(rows: &[&str]) -> TestResult<Raster<u8>> {
    let mut grid = Vec::with_capacity(rows.len());
    for (row, line) in rows.iter().enumerate() {
        let mut samples = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            let val = match ch {
                '.' => 0,
                '#' => 255,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(TestError::InvalidPattern { row, col, ch }),
            };
            samples.push(val);
        }
        grid.push(samples);
    }
    Ok(Raster::from_rows(&grid)?)
}

/// Build an 8-bit raster with the given `(x, y, value)` samples set.
///
/// # Panics
///
/// Panics if the dimensions are zero or a point is out of bounds.
pub fn raster_from_points(width: u32, height: u32, points: &[(u32, u32, u8)]) -> Raster<u8> {
    let mut raster = Raster::new(width, height).expect("valid test raster dimensions");
    for &(x, y, v) in points {
        raster.set_pixel(x, y, v).expect("test point in bounds");
    }
    raster
}

/// Render a raster back to pattern rows.
///
/// Samples 1-9 print as their digit, other foreground samples as `#`.
pub fn render_pattern<T: gapseg_core::Sample>(raster: &Raster<T>) -> Vec<String> {
    raster
        .rows()
        .map(|row| {
            row.iter()
                .map(|s| {
                    let v = s.to_f64_lossy();
                    if s.is_background() {
                        '.'
                    } else if (1.0..=9.0).contains(&v) && v.fract() == 0.0 {
                        char::from(b'0' + v as u8)
                    } else {
                        '#'
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_round_trip() {
        let rows = ["5..#", ".1..", "...9"];
        let raster = raster_from_pattern(&rows).unwrap();
        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.get_pixel(3, 0), Some(255));
        assert_eq!(raster.get_pixel(1, 1), Some(1));
        assert_eq!(render_pattern(&raster), rows);
    }

    #[test]
    fn test_pattern_errors() {
        assert!(matches!(
            raster_from_pattern(&["..", ".x"]),
            Err(TestError::InvalidPattern {
                row: 1,
                col: 1,
                ch: 'x'
            })
        ));
        assert!(matches!(
            raster_from_pattern(&["...", ".."]),
            Err(TestError::Raster(_))
        ));
        assert!(matches!(raster_from_pattern(&[]), Err(TestError::Raster(_))));
    }

    #[test]
    fn test_points() {
        let raster = raster_from_points(3, 2, &[(0, 0, 4), (2, 1, 7)]);
        assert_eq!(raster.data(), &[4, 0, 0, 0, 0, 7]);
    }
}
