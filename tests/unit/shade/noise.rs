use super::*;

#[test]
fn simplex_is_deterministic() {
    let p = Vec2::new(3.7, -1.2);
    assert_eq!(simplex2(p).to_bits(), simplex2(p).to_bits());
}

#[test]
fn simplex_stays_in_unit_range() {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for j in 0..200 {
        for i in 0..200 {
            let n = simplex2(Vec2::new(f64::from(i) * 0.173, f64::from(j) * 0.219 - 7.0));
            assert!(n.is_finite());
            lo = lo.min(n);
            hi = hi.max(n);
        }
    }
    assert!(lo >= -1.05 && hi <= 1.05, "range [{lo}, {hi}]");
    // A field that never moves is not noise.
    assert!(hi - lo > 1.0, "range [{lo}, {hi}]");
}

#[test]
fn simplex_is_continuous() {
    let p = Vec2::new(12.34, 5.67);
    let e = Vec2::new(1e-6, 0.0);
    assert!((simplex2(p) - simplex2(p + e)).abs() < 1e-3);
}

#[test]
fn fbm_single_octave_matches_simplex() {
    let p = Vec2::new(0.9, 0.1);
    assert_eq!(fbm2(p, 1), simplex2(p));
    assert_eq!(fbm2(p, 0), simplex2(p));
}

#[test]
fn fbm_stays_in_unit_range() {
    for j in 0..50 {
        for i in 0..50 {
            let n = fbm2(Vec2::new(f64::from(i) * 0.31, f64::from(j) * 0.27), 6);
            assert!((-1.05..=1.05).contains(&n), "{n}");
        }
    }
}
