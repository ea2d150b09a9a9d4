use std::num::NonZeroU8;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::backends::Format;
use crate::brand::DEFAULT_NAME;
use crate::pipeline::extract::{
    ExtractOptions, Method, DEFAULT_ALPHA_THRESHOLD, DEFAULT_MAX_COLORS, DEFAULT_STEP,
};
use crate::pipeline::load::DEFAULT_SAMPLE_SIZE;

/// Extract a brand color palette from a logo or any other image.
#[derive(Parser, Debug)]
#[command(name = "brandkit", version, about)]
pub struct Args {
    /// Path to the input image
    pub image: PathBuf,

    /// Brand name used in exported palettes
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Maximum number of palette colors
    #[arg(
        short = 'n',
        long = "colors",
        default_value_t = DEFAULT_MAX_COLORS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub colors: usize,

    /// Quantization step per channel
    #[arg(long, default_value_t = DEFAULT_STEP)]
    pub step: NonZeroU8,

    /// Pixels with alpha below this are ignored
    #[arg(long, default_value_t = DEFAULT_ALPHA_THRESHOLD)]
    pub alpha_threshold: u8,

    /// Side of the square the image is resampled to before extraction
    #[arg(
        long,
        default_value_t = DEFAULT_SAMPLE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub sample_size: u32,

    /// Extract from every source pixel instead of resampling
    #[arg(long, conflicts_with = "sample_size")]
    pub full_resolution: bool,

    /// Extraction method
    #[arg(short, long, value_enum, default_value_t = Method::Buckets)]
    pub method: Method,

    /// Merge colors closer than this CIELAB ΔE (off when omitted)
    #[arg(long)]
    pub merge_distance: Option<f32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    pub format: Format,

    /// Write the palette to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print colored swatches of the extracted palette to stderr
    #[arg(long)]
    pub preview: bool,

    /// Review and edit the palette interactively before export
    #[arg(long)]
    pub tui: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            max_colors: self.colors,
            step: self.step,
            alpha_threshold: self.alpha_threshold,
            method: self.method,
            merge_distance: self.merge_distance,
        }
    }

    /// `None` means extract at source resolution.
    pub fn sample_size(&self) -> Option<u32> {
        (!self.full_resolution).then_some(self.sample_size)
    }

    /// Default `tracing` filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "brandkit=warn",
            1 => "brandkit=info",
            _ => "brandkit=debug",
        }
    }
}
