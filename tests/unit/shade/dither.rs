use std::collections::BTreeSet;

use super::*;

fn at(x: i64, y: i64) -> BlockPos {
    BlockPos { x, y }
}

#[test]
fn block_pos_divides_by_block_edge() {
    assert_eq!(BlockPos::of_pixel(0, 0, 6), at(0, 0));
    assert_eq!(BlockPos::of_pixel(5, 6, 6), at(0, 1));
    assert_eq!(BlockPos::of_pixel(17, 3, 1), at(17, 3));
    assert_eq!(BlockPos::of_pixel(9, 9, 0), at(9, 9));
}

#[test]
fn ordered_has_period_four_on_both_axes() {
    for y in -8..8 {
        for x in -8..8 {
            let v = ordered(at(x, y));
            assert_eq!(v, ordered(at(x + 4, y)));
            assert_eq!(v, ordered(at(x, y + 4)));
        }
    }
}

#[test]
fn ordered_values_are_exactly_k_over_16_minus_half() {
    let mut seen = BTreeSet::new();
    for y in 0..4 {
        for x in 0..4 {
            let v = ordered(at(x, y));
            let k = ((v + 0.5) * 16.0).round() as i64;
            assert_eq!(v, k as f64 / 16.0 - 0.5);
            seen.insert(k);
        }
    }
    assert_eq!(seen, (0..16).collect::<BTreeSet<_>>());
}

#[test]
fn random_is_bounded_and_position_stable() {
    for y in 0..16 {
        for x in 0..16 {
            let v = random(at(x, y));
            assert!((-0.5..0.5).contains(&v));
            assert_eq!(v.to_bits(), random(at(x, y)).to_bits());
        }
    }
    assert_ne!(random(at(1, 2)), random(at(2, 1)));
}

#[test]
fn lines_follow_rotated_sine() {
    let f = 50.0;
    let p = at(3, 7);
    let ry = 3.0 * FRAC_PI_4.sin() + 7.0 * FRAC_PI_4.cos();
    let want = 0.5 * (ry * f * 0.5).sin();
    assert!((lines(p, f) - want).abs() < 1e-12);
    assert_eq!(lines(at(0, 0), f), 0.0);
}

#[test]
fn lines_are_constant_along_the_diagonal() {
    // Rotated y depends on x + y only.
    let f = 37.0;
    assert!((lines(at(2, 5), f) - lines(at(5, 2), f)).abs() < 1e-12);
    assert!((lines(at(0, 7), f) - lines(at(3, 4), f)).abs() < 1e-12);
}

#[test]
fn halftone_dots_grow_with_luma() {
    let f = 20.0;
    let count_on = |luma: f64| {
        let mut on = 0;
        for y in 0..64 {
            for x in 0..64 {
                if halftone(at(x, y), f, 0.5, luma) > 0.0 {
                    on += 1;
                }
            }
        }
        on
    };
    let dark = count_on(0.0);
    let mid = count_on(0.3);
    let bright = count_on(0.9);
    assert_eq!(dark, 0);
    assert!(mid > dark && bright > mid, "{dark} {mid} {bright}");
}

#[test]
fn halftone_full_luma_and_weight_covers_cells() {
    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(halftone(at(x, y), 20.0, 1.0, 1.0), 0.5);
        }
    }
}

#[test]
fn dispatch_matches_direct_calls() {
    let r = RenderConfig {
        lines: 40.0,
        weight: 0.5,
    };
    let p = at(5, 9);
    assert_eq!(dither_value(DitherMethod::Ordered, p, &r, 0.2), ordered(p));
    assert_eq!(dither_value(DitherMethod::Random, p, &r, 0.2), random(p));
    assert_eq!(dither_value(DitherMethod::Lines, p, &r, 0.2), lines(p, 40.0));
    assert_eq!(
        dither_value(DitherMethod::Halftone, p, &r, 0.2),
        halftone(p, 40.0, 0.5, 0.2)
    );
}
