use std::f64::consts::{FRAC_PI_4, SQRT_2};

use crate::config::model::{DitherMethod, RenderConfig};
use crate::foundation::core::Vec2;
use crate::foundation::math::{fract, hash2_unit};

/// Standard 4x4 Bayer ordering, row-major, values `0..16`.
pub const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

const HALFTONE_DENSITY: f64 = 200.0;

/// Integer position of a pixel block: output pixel position divided by the block edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockPos {
    /// Block column.
    pub x: i64,
    /// Block row (row 0 at the top).
    pub y: i64,
}

impl BlockPos {
    /// Block containing output pixel `(px, py)`.
    pub fn of_pixel(px: u32, py: u32, block: u32) -> Self {
        let block = block.max(1);
        Self {
            x: i64::from(px / block),
            y: i64::from(py / block),
        }
    }

    fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

/// Perturbation in roughly `[-0.5, 0.5]`, before scaling by the dither amount.
///
/// `luma` is the preprocessed source luma; only [`DitherMethod::Halftone`] reads it.
pub fn dither_value(method: DitherMethod, pos: BlockPos, render: &RenderConfig, luma: f64) -> f64 {
    match method {
        DitherMethod::Ordered => ordered(pos),
        DitherMethod::Random => random(pos),
        DitherMethod::Lines => lines(pos, render.lines),
        DitherMethod::Halftone => halftone(pos, render.lines, render.weight, luma),
    }
}

/// Bayer threshold shifted to `[-0.5, 0.5)`.
pub fn ordered(pos: BlockPos) -> f64 {
    let x = pos.x.rem_euclid(4) as usize;
    let y = pos.y.rem_euclid(4) as usize;
    f64::from(BAYER_4X4[y][x]) / 16.0 - 0.5
}

/// Position hash shifted to `[-0.5, 0.5)`. Time never enters, so the grain holds still.
pub fn random(pos: BlockPos) -> f64 {
    hash2_unit(pos.x, pos.y) - 0.5
}

fn rotate_45(p: Vec2) -> Vec2 {
    let (s, c) = FRAC_PI_4.sin_cos();
    Vec2::new(p.x * c - p.y * s, p.x * s + p.y * c)
}

/// `0.5 sin(rotated.y * frequency * 0.5)` on the 45 degree rotated block lattice.
pub fn lines(pos: BlockPos, frequency: f64) -> f64 {
    let r = rotate_45(pos.as_vec2());
    0.5 * (r.y * frequency * 0.5).sin()
}

/// Dot screen on the rotated lattice: +0.5 inside a dot, -0.5 outside.
///
/// Cells are `200 / frequency` blocks wide (at least 2), so the UI's line frequency reads as
/// screen density. Dot radius grows with `sqrt(luma)` and with `weight`, reaching the cell
/// corner at full luma and weight.
pub fn halftone(pos: BlockPos, frequency: f64, weight: f64, luma: f64) -> f64 {
    let radius = luma.clamp(0.0, 1.0).sqrt() * SQRT_2 * (0.5 + 0.5 * weight.clamp(0.0, 1.0));
    if radius <= 0.0 {
        return -0.5;
    }
    let cell = halftone_cell_blocks(frequency);
    let q = rotate_45(pos.as_vec2()) / cell;
    let local = Vec2::new(fract(q.x) - 0.5, fract(q.y) - 0.5);
    // 0 at the cell center, 1 at an edge midpoint, sqrt(2) at a corner.
    let dist = local.hypot() * 2.0;
    if dist <= radius { 0.5 } else { -0.5 }
}

fn halftone_cell_blocks(frequency: f64) -> f64 {
    (HALFTONE_DENSITY / frequency.max(1.0)).max(2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/shade/dither.rs"]
mod tests;
