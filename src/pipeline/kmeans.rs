use kmeans_colors::get_kmeans_hamerly;
use palette::Lab;

use crate::color::Color;
use crate::pipeline::extract::ExtractedColor;

const MAX_ITER: usize = 20;
const CONVERGE: f32 = 5.0;
const SEED: u64 = 42;

/// Cluster opaque pixels in CIELAB space and return one entry per non-empty
/// cluster, in centroid order.
///
/// Uses Hamerly's algorithm with K-means++ initialization and a fixed seed,
/// so the same pixels always give the same clusters.
pub fn cluster(pixels: &[[u8; 4]], k: usize, alpha_threshold: u8) -> Vec<ExtractedColor> {
    let lab: Vec<Lab> = pixels
        .iter()
        .filter(|p| p[3] >= alpha_threshold)
        .map(|&[r, g, b, _]| Color::new(r, g, b).to_lab())
        .collect();

    // Cluster indices are u8 and K-means++ needs at least k points.
    let k = k.min(lab.len()).min(usize::from(u8::MAX));
    if k == 0 {
        return Vec::new();
    }

    let result = get_kmeans_hamerly(k, MAX_ITER, CONVERGE, false, &lab, SEED);

    let mut counts = vec![0u32; k];
    for &idx in &result.indices {
        counts[idx as usize] += 1;
    }
    let total = lab.len() as f32;

    tracing::debug!(points = lab.len(), k, score = result.score, "k-means finished");

    result
        .centroids
        .iter()
        .enumerate()
        .filter(|(i, _)| counts[*i] > 0)
        .map(|(i, centroid)| ExtractedColor {
            color: Color::from_lab(*centroid),
            population: counts[i],
            weight: counts[i] as f32 / total,
        })
        .collect()
}
