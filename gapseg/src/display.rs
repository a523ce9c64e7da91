//! Terminal previews of rasters
//!
//! Renders a raster as ASCII art for quick inspection. Foreground samples
//! map onto a ten-step ramp by magnitude relative to the raster's peak;
//! background stays blank so segment shapes read at a glance.

use gapseg_core::{Raster, Sample};

/// Intensity ramp, blank first
const RAMP: &[u8] = b" .:-=+*#%@";

/// Render `raster` as ASCII art at most `max_width` characters wide.
///
/// Each character covers a block of source pixels twice as tall as it is
/// wide, approximating the aspect of a terminal cell. A block shows the
/// strongest sample it contains; any foreground sample makes the block
/// visible.
pub fn render_ascii<T: Sample>(raster: &Raster<T>, max_width: usize) -> String {
    let width = raster.width() as usize;
    let height = raster.height() as usize;

    let step_x = width.div_ceil(width.min(max_width.max(1)));
    let step_y = step_x * 2;
    let cols = width.div_ceil(step_x);
    let rows = height.div_ceil(step_y);

    let peak = raster.peak_magnitude();
    let top = RAMP.len() - 1;

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut line = String::with_capacity(cols);
        for col in 0..cols {
            let mut strongest: Option<f64> = None;
            for y in row * step_y..((row + 1) * step_y).min(height) {
                for x in col * step_x..((col + 1) * step_x).min(width) {
                    let s = raster.get_pixel_unchecked(x as u32, y as u32);
                    if s.is_foreground() {
                        let m = s.to_f64_lossy().abs();
                        strongest = Some(strongest.map_or(m, |cur| cur.max(m)));
                    }
                }
            }

            let level = match strongest {
                None => 0,
                Some(m) if peak > 0.0 => ((m * top as f64 / peak).ceil() as usize).clamp(1, top),
                Some(_) => top,
            };
            line.push(RAMP[level] as char);
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// One-line summary: extent, foreground count and foreground bounds.
pub fn describe<T: Sample>(raster: &Raster<T>) -> String {
    let bounds = match raster.bounding_box() {
        Some(b) => format!("{}x{} at ({}, {})", b.w, b.h, b.x, b.y),
        None => "none".to_string(),
    };
    format!(
        "{}x{}, {} foreground pixels, bounds {}",
        raster.width(),
        raster.height(),
        raster.count_foreground(),
        bounds
    )
}
