//! gapseg command-line tool
//!
//! Loads a single-channel image, segments it and reports how many segments
//! were kept.
//!
//! ```text
//! gapseg image.pgm --dist 10 --min-size 100 --show
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use gapseg::display::{describe, render_ascii};
use gapseg::io::{GrayImage, read_image};
use gapseg::region::{DEFAULT_DIST, DEFAULT_MIN_SIZE, Segmentation, SegmentationOptions};
use gapseg::{Raster, Sample};
use log::info;
use std::path::PathBuf;

/// Gap-tolerant region growing segmentation
#[derive(Parser, Debug)]
#[command(name = "gapseg")]
#[command(about = "Segment a single-channel image by gap-tolerant region growing", long_about = None)]
#[command(version)]
struct Cli {
    /// Image to segment (BMP, PNG or PNM, single channel)
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Gap tolerance: a region may cross up to dist - 1 background pixels
    #[arg(short, long, default_value_t = i64::from(DEFAULT_DIST), allow_negative_numbers = true)]
    dist: i64,

    /// Smallest segment, in pixels, that is kept
    #[arg(short, long, default_value_t = DEFAULT_MIN_SIZE as i64, allow_negative_numbers = true)]
    min_size: i64,

    /// Print ASCII previews of the input and of every kept segment
    #[arg(long)]
    show: bool,

    /// Maximum preview width in characters
    #[arg(long, default_value_t = 64)]
    preview_width: usize,

    /// Log level specification (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)
        .with_context(|| format!("invalid log specification {:?}", level))?
        .log_to_stderr()
        .start()
        .context("logger initialization failed")?;
    Ok(handle)
}

fn segment<T: Sample>(image: Raster<T>, options: &SegmentationOptions, cli: &Cli) -> Result<usize> {
    if cli.show {
        println!("Original image: {}", describe(&image));
        println!("{}", render_ascii(&image, cli.preview_width));
    }

    let mut seg = Segmentation::new(image);

    info!("Finding segments...");
    seg.find_all_segments(options.dist);
    info!("{} segments before size filtering", seg.segment_count());

    info!("Post processing segments...");
    seg.convert_segments_to_img(options.min_size)?;

    let outputs = seg.segments_img();
    info!("Found {} segments!", outputs.len());

    if cli.show {
        for (i, out) in outputs.iter().enumerate() {
            println!();
            println!("Segment {}: {}", i + 1, describe(out));
            println!("{}", render_ascii(out, cli.preview_width));
        }
    }

    Ok(outputs.len())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = setup_logging(&cli.log_level)?;

    let options = SegmentationOptions::try_new(cli.dist, cli.min_size)?;

    info!("Loading image");
    let image = read_image(&cli.image)
        .with_context(|| format!("cannot read image {}", cli.image.display()))?;
    info!(
        "{}x{} image, {} bits per sample",
        image.width(),
        image.height(),
        image.depth_bits()
    );

    let found = match image {
        GrayImage::Gray8(raster) => segment(raster, &options, &cli)?,
        GrayImage::Gray16(raster) => segment(raster, &options, &cli)?,
    };
    println!("Found {} segments!", found);

    Ok(())
}
