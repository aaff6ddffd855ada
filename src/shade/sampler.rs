use crate::foundation::core::{Canvas, Point};

/// Snap `uv` to the midpoint of its `block`x`block` pixel cell.
///
/// Every coordinate inside one cell maps to the same sampling point. `block <= 1` returns `uv`
/// untouched.
pub fn pixelate(uv: Point, block: u32, canvas: Canvas) -> Point {
    if block <= 1 {
        return uv;
    }
    let cell_w = f64::from(block) / f64::from(canvas.width);
    let cell_h = f64::from(block) / f64::from(canvas.height);
    Point::new(
        (uv.x / cell_w).floor() * cell_w + cell_w * 0.5,
        (uv.y / cell_h).floor() * cell_h + cell_h * 0.5,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/shade/sampler.rs"]
mod tests;
