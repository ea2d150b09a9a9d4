use std::collections::HashMap;
use std::num::NonZeroU8;

use crate::color::Color;
use crate::pipeline::{kmeans, merge};

pub const DEFAULT_MAX_COLORS: usize = 5;
pub const DEFAULT_STEP: NonZeroU8 = match NonZeroU8::new(32) {
    Some(step) => step,
    None => unreachable!(),
};
/// Pixels with alpha below this are treated as background and skipped.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 200;

/// How dominant colors are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Method {
    /// Count pixels per quantized RGB bucket.
    #[default]
    Buckets,
    /// Cluster opaque pixels with K-means in CIELAB space.
    Kmeans,
}

/// Tunables for a single extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    pub max_colors: usize,
    pub step: NonZeroU8,
    pub alpha_threshold: u8,
    pub method: Method,
    /// Fold colors closer than this ΔE into the more dominant one.
    pub merge_distance: Option<f32>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_colors: DEFAULT_MAX_COLORS,
            step: DEFAULT_STEP,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            method: Method::Buckets,
            merge_distance: None,
        }
    }
}

/// A palette entry together with how many pixels it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedColor {
    pub color: Color,
    pub population: u32,
    /// Share of the counted (opaque) pixels, in `[0, 1]`.
    pub weight: f32,
}

/// Round a channel to the nearest multiple of `step`, halves rounding up,
/// then clamp to the channel range.
pub fn quantize_channel(value: u8, step: NonZeroU8) -> u8 {
    let step = u32::from(step.get());
    let rounded = (u32::from(value) + step / 2) / step * step;
    rounded.min(255) as u8
}

/// Quantize all three channels of an RGB triple.
pub fn quantize(rgb: [u8; 3], step: NonZeroU8) -> Color {
    Color::new(
        quantize_channel(rgb[0], step),
        quantize_channel(rgb[1], step),
        quantize_channel(rgb[2], step),
    )
}

/// Count opaque pixels per quantized color.
///
/// Buckets come back in first-seen order so that a later stable sort breaks
/// ties reproducibly.
pub fn bucket_pixels(pixels: &[[u8; 4]], step: NonZeroU8, alpha_threshold: u8) -> Vec<(Color, u32)> {
    let mut index: HashMap<Color, usize> = HashMap::new();
    let mut buckets: Vec<(Color, u32)> = Vec::new();

    for &[r, g, b, a] in pixels {
        if a < alpha_threshold {
            continue;
        }
        let key = quantize([r, g, b], step);
        match index.get(&key) {
            Some(&i) => buckets[i].1 += 1,
            None => {
                index.insert(key, buckets.len());
                buckets.push((key, 1));
            }
        }
    }

    buckets
}

/// Extract up to `max_colors` dominant colors, most dominant first.
///
/// Never fails: fully transparent or empty input yields an empty list.
pub fn extract_colors(pixels: &[[u8; 4]], options: &ExtractOptions) -> Vec<ExtractedColor> {
    if options.max_colors == 0 {
        return Vec::new();
    }

    let mut colors = match options.method {
        Method::Buckets => {
            let buckets = bucket_pixels(pixels, options.step, options.alpha_threshold);
            tracing::debug!(
                pixels = pixels.len(),
                buckets = buckets.len(),
                step = options.step.get(),
                "bucketed pixels"
            );
            to_extracted(buckets)
        }
        Method::Kmeans => kmeans::cluster(pixels, options.max_colors, options.alpha_threshold),
    };

    // Stable: equal populations keep first-seen order.
    colors.sort_by(|a, b| b.population.cmp(&a.population));

    if let Some(distance) = options.merge_distance {
        merge::merge_similar(&mut colors, distance);
    }

    colors.truncate(options.max_colors);
    colors
}

/// Extract the palette as lowercase `#rrggbb` strings.
pub fn extract_palette(pixels: &[[u8; 4]], options: &ExtractOptions) -> Vec<String> {
    extract_colors(pixels, options)
        .into_iter()
        .map(|c| c.color.to_hex())
        .collect()
}

fn to_extracted(buckets: Vec<(Color, u32)>) -> Vec<ExtractedColor> {
    let total: u32 = buckets.iter().map(|(_, n)| n).sum();
    buckets
        .into_iter()
        .map(|(color, population)| ExtractedColor {
            color,
            population,
            weight: population as f32 / total.max(1) as f32,
        })
        .collect()
}
