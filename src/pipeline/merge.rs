use crate::pipeline::extract::ExtractedColor;

/// Fold colors that sit within `distance` ΔE of a more dominant color.
///
/// `colors` must already be sorted by population, descending. The surviving
/// color keeps its own value and absorbs the population and weight of every
/// color folded into it; the result is re-sorted stably.
pub fn merge_similar(colors: &mut Vec<ExtractedColor>, distance: f32) {
    if distance <= 0.0 {
        return;
    }
    let threshold = distance * distance;
    let before = colors.len();

    let mut kept: Vec<ExtractedColor> = Vec::with_capacity(colors.len());
    for candidate in colors.drain(..) {
        match kept
            .iter_mut()
            .find(|k| k.color.delta_e_sq(candidate.color) < threshold)
        {
            Some(target) => {
                target.population += candidate.population;
                target.weight += candidate.weight;
            }
            None => kept.push(candidate),
        }
    }

    kept.sort_by(|a, b| b.population.cmp(&a.population));
    *colors = kept;

    tracing::debug!(before, after = colors.len(), distance, "merged similar colors");
}
