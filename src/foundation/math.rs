/// GLSL-style `fract`: `x - floor(x)`, always in `[0, 1)`.
pub(crate) fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Hermite interpolation between `edge0` and `edge1`.
///
/// Reversed edges (`edge0 > edge1`) produce a falling curve.
pub(crate) fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// SplitMix64 finalizer.
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Position-seeded value in `[0, 1)` with 53 bits of precision.
pub(crate) fn hash2_unit(x: i64, y: i64) -> f64 {
    let h = mix64((x as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93) ^ mix64(y as u64));
    ((h >> 11) as f64) * (1.0 / ((1u64 << 53) as f64))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
