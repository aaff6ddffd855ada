use super::*;

fn effects(warp: f64, mouse: f64) -> EffectsConfig {
    EffectsConfig {
        vignette: 0.0,
        glow: 0.0,
        warp,
        mouse,
    }
}

#[test]
fn vignette_zero_is_identity_everywhere() {
    let c = Rgb::new(0.3, 0.6, 0.9);
    for uv in [CENTER, Point::new(0.0, 0.0), Point::new(1.0, 0.3)] {
        assert_eq!(vignette(c, uv, 0.0), c);
    }
}

#[test]
fn full_vignette_keeps_center_and_darkens_corners() {
    let c = Rgb::WHITE;
    assert_eq!(vignette(c, CENTER, 1.0), c);
    let corner = vignette(c, Point::new(0.0, 0.0), 1.0);
    assert!(corner.r < 0.05, "{corner:?}");
    let edge = vignette(c, Point::new(0.5, 0.0), 1.0);
    assert!(edge.r > corner.r && edge.r < 1.0);
}

#[test]
fn partial_vignette_has_flat_core() {
    // intensity 0.5: full brightness inside distance 0.4.
    let c = Rgb::WHITE;
    assert_eq!(vignette(c, Point::new(0.5, 0.2), 0.5), c);
    assert!(vignette(c, Point::new(0.0, 0.0), 0.5).r < 1.0);
}

#[test]
fn glow_boosts_only_bright_colors() {
    assert_eq!(glow(Rgb::gray(0.5), 2.0), Rgb::gray(0.5));
    assert_eq!(glow(Rgb::gray(0.69), 2.0), Rgb::gray(0.69));
    let g = glow(Rgb::gray(0.8), 1.0);
    assert!((g.r - 1.1).abs() < 1e-12);
    assert_eq!(glow(Rgb::WHITE, 0.0), Rgb::WHITE);
}

#[test]
fn warp_disabled_is_identity() {
    let uv = Point::new(0.25, 0.75);
    assert_eq!(warp_uv(uv, 3.0, 0.0), uv);
}

#[test]
fn warp_offset_is_diagonal_and_bounded() {
    let uv = Point::new(0.41, 0.13);
    let w = warp_uv(uv, 1.0, 5.0);
    let d = w - uv;
    assert_eq!(d.x, d.y);
    assert!(d.x.abs() <= 5.0 * 0.05 * 1.05);
}

#[test]
fn pointer_raises_warp_only_when_enabled() {
    let p = Point::new(0.8, 0.1);
    assert_eq!(effective_warp(&effects(1.0, 0.0), p), 1.0);
    assert!((effective_warp(&effects(1.0, 1.0), p) - 1.8).abs() < 1e-12);
    assert_eq!(effective_warp(&effects(0.0, 1.0), Point::ORIGIN), 0.0);
}
