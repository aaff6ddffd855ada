use crate::foundation::core::Rgb;

/// Snap `color` to the nearest entry of `palette` by Euclidean RGB distance.
///
/// Ties keep the earliest entry (strict less-than scan). An empty palette returns `color`
/// unchanged.
pub fn nearest_color(color: Rgb, palette: &[Rgb]) -> Rgb {
    let mut best = color;
    let mut best_dist = f64::INFINITY;
    for &entry in palette {
        let d = color.distance_sq(entry);
        if d < best_dist {
            best_dist = d;
            best = entry;
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/palette/quantize.rs"]
mod tests;
