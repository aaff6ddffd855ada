use crate::config::model::EffectsConfig;
use crate::foundation::core::{Point, Rgb, Vec2};
use crate::foundation::math::smoothstep;
use crate::shade::noise::simplex2;

const CENTER: Point = Point::new(0.5, 0.5);
const VIGNETTE_RADIUS: f64 = 0.8;
const GLOW_THRESHOLD: f64 = 0.7;

/// Warp magnitude for this frame: the configured warp plus `pointer.x * mouse` when pointer
/// interaction is on.
pub fn effective_warp(effects: &EffectsConfig, pointer: Point) -> f64 {
    if effects.mouse > 0.0 {
        effects.warp + pointer.x * effects.mouse
    } else {
        effects.warp
    }
}

/// Offset `uv` diagonally by noise at `uv * 3 + time * 0.2`, scaled by `amount * 0.05`.
/// Runs before pixelation.
pub fn warp_uv(uv: Point, time: f64, amount: f64) -> Point {
    if amount <= 0.0 {
        return uv;
    }
    let t = time * 0.2;
    let n = simplex2(uv.to_vec2() * 3.0 + Vec2::new(t, t));
    uv + Vec2::new(n, n) * (amount * 0.05)
}

/// Radial falloff from 1 at the center to 0 at distance `0.8` from it, with the inner edge
/// pulled in by `intensity`. `intensity <= 0` leaves the color alone.
pub fn vignette(color: Rgb, uv: Point, intensity: f64) -> Rgb {
    if intensity <= 0.0 {
        return color;
    }
    let dist = uv.distance(CENTER);
    let inner = VIGNETTE_RADIUS - intensity * VIGNETTE_RADIUS;
    color.scale(smoothstep(VIGNETTE_RADIUS, inner, dist))
}

/// Add `intensity * 0.3` to every channel of colors brighter than luma 0.7.
pub fn glow(color: Rgb, intensity: f64) -> Rgb {
    if intensity <= 0.0 || color.luma() <= GLOW_THRESHOLD {
        return color;
    }
    color.offset(intensity * 0.3)
}

#[cfg(test)]
#[path = "../../tests/unit/shade/effects.rs"]
mod tests;
