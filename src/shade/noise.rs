//! 2D simplex noise (Ashima/McEwan permutation-polynomial variant) and an fBm sum over it.
//!
//! Pure functions of the input coordinate: no tables, no seeds, no state.

use crate::foundation::core::Vec2;
use crate::foundation::math::fract;

const C0: f64 = 0.211_324_865_405_187; // (3 - sqrt(3)) / 6
const C1: f64 = 0.366_025_403_784_439; // (sqrt(3) - 1) / 2
const C2: f64 = -0.577_350_269_189_626; // -1 + 2 * C0
const C3: f64 = 0.024_390_243_902_439; // 1 / 41

fn mod289(x: f64) -> f64 {
    x - (x / 289.0).floor() * 289.0
}

fn permute(x: f64) -> f64 {
    mod289((x * 34.0 + 1.0) * x)
}

/// Simplex noise at `v`, roughly in `[-1, 1]`.
pub fn simplex2(v: Vec2) -> f64 {
    let s = (v.x + v.y) * C1;
    let i = Vec2::new((v.x + s).floor(), (v.y + s).floor());
    let t = (i.x + i.y) * C0;
    let x0 = Vec2::new(v.x - i.x + t, v.y - i.y + t);

    let i1 = if x0.x > x0.y {
        Vec2::new(1.0, 0.0)
    } else {
        Vec2::new(0.0, 1.0)
    };
    let x1 = Vec2::new(x0.x + C0 - i1.x, x0.y + C0 - i1.y);
    let x2 = Vec2::new(x0.x + C2, x0.y + C2);

    let ix = mod289(i.x);
    let iy = mod289(i.y);
    let p = [
        permute(permute(iy) + ix),
        permute(permute(iy + i1.y) + ix + i1.x),
        permute(permute(iy + 1.0) + ix + 1.0),
    ];

    let corners = [x0, x1, x2];
    let mut sum = 0.0;
    for (k, corner) in corners.iter().enumerate() {
        let m = (0.5 - corner.dot(*corner)).max(0.0);
        let m = m * m * m * m;

        let x = 2.0 * fract(p[k] * C3) - 1.0;
        let h = x.abs() - 0.5;
        let a0 = x - (x + 0.5).floor();
        let norm = 1.792_842_914_001_59 - 0.853_734_720_953_14 * (a0 * a0 + h * h);

        let g = a0 * corner.x + h * corner.y;
        sum += m * norm * g;
    }
    130.0 * sum
}

/// Fractal sum of `octaves` simplex layers, each at double frequency and half amplitude,
/// normalized back to the single-layer range. `octaves <= 1` is plain [`simplex2`].
pub fn fbm2(v: Vec2, octaves: u32) -> f64 {
    if octaves <= 1 {
        return simplex2(v);
    }
    let mut sum = 0.0;
    let mut norm = 0.0;
    let mut amp = 1.0;
    let mut freq = 1.0;
    for _ in 0..octaves {
        sum += amp * simplex2(v * freq);
        norm += amp;
        amp *= 0.5;
        freq *= 2.0;
    }
    sum / norm
}

#[cfg(test)]
#[path = "../../tests/unit/shade/noise.rs"]
mod tests;
