use crate::config::model::{GeneratorConfig, GeneratorKind};
use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::fract;
use crate::shade::noise::{fbm2, simplex2};

const CENTER: Point = Point::new(0.5, 0.5);

/// Evaluate the configured pattern at `uv` and `time`, returning an intensity in `[0, 1]`.
///
/// Pure in `(uv, time, cfg)`.
pub fn generate(uv: Point, time: f64, cfg: &GeneratorConfig) -> f64 {
    let uv = domain_warp(uv, time, cfg);
    match cfg.kind {
        GeneratorKind::Spiral => spiral(uv, time, cfg),
        GeneratorKind::Noise => noise(uv, time, cfg),
        GeneratorKind::Grid => grid(uv, time, cfg),
    }
}

/// `0.5 + 0.5 sin(d * scale + theta * direction + time * speed)` around the canvas center.
pub fn spiral(uv: Point, time: f64, cfg: &GeneratorConfig) -> f64 {
    let pos = uv - CENTER;
    let dist = pos.hypot();
    let angle = pos.y.atan2(pos.x);
    let v = (dist * cfg.scale + angle * cfg.direction + time * cfg.speed).sin();
    v * 0.5 + 0.5
}

/// Drifting fBm. Raw values under `threshold - 1` are cut to zero before the `0.5 ± 0.5` remap.
pub fn noise(uv: Point, time: f64, cfg: &GeneratorConfig) -> f64 {
    let t = time * cfg.speed;
    let p = uv.to_vec2() * cfg.scale + Vec2::new(t * 0.1, t * 0.05);
    let mut n = fbm2(p, cfg.octaves);
    if n < cfg.threshold - 1.0 {
        n = 0.0;
    }
    n * 0.5 + 0.5
}

/// Checker cells drifting right at `time * speed * 0.1`: 1 where both cell fractions are
/// at least one half.
pub fn grid(uv: Point, time: f64, cfg: &GeneratorConfig) -> f64 {
    let drift = time * cfg.speed * 0.1;
    let fx = fract(uv.x * cfg.scale + drift);
    let fy = fract(uv.y * cfg.scale);
    if fx >= 0.5 && fy >= 0.5 { 1.0 } else { 0.0 }
}

fn domain_warp(uv: Point, time: f64, cfg: &GeneratorConfig) -> Point {
    if cfg.warp <= 0.0 {
        return uv;
    }
    let t = time * cfg.speed * 0.1;
    let q = uv.to_vec2() * 2.0 + Vec2::new(t, t);
    let offset = Vec2::new(simplex2(q), simplex2(q + Vec2::new(5.2, 1.3)));
    uv + offset * (cfg.warp * 0.1)
}

#[cfg(test)]
#[path = "../../tests/unit/shade/generators.rs"]
mod tests;
