use super::*;

const BW: [Rgb; 2] = [Rgb::BLACK, Rgb::WHITE];

#[test]
fn black_white_picks_geometrically_nearer() {
    assert_eq!(nearest_color(Rgb::gray(0.6), &BW), Rgb::WHITE);
    assert_eq!(nearest_color(Rgb::gray(0.4), &BW), Rgb::BLACK);
    assert_eq!(nearest_color(Rgb::new(0.9, 0.1, 0.1), &BW), Rgb::BLACK);
    assert_eq!(nearest_color(Rgb::new(0.9, 0.9, 0.1), &BW), Rgb::WHITE);
}

#[test]
fn distance_not_luma_decides() {
    // Luma is ~0.43 (< 0.5) but the point sits nearer to white in RGB space.
    let c = Rgb::new(0.2, 0.45, 1.0);
    assert!(c.luma() < 0.5);
    assert_eq!(nearest_color(c, &BW), Rgb::WHITE);
}

#[test]
fn exact_midpoint_tie_keeps_first_entry() {
    assert_eq!(nearest_color(Rgb::gray(0.5), &BW), Rgb::BLACK);
    let reversed = [Rgb::WHITE, Rgb::BLACK];
    assert_eq!(nearest_color(Rgb::gray(0.5), &reversed), Rgb::WHITE);
}

#[test]
fn duplicate_entries_resolve_to_first() {
    let red = Rgb::new(1.0, 0.0, 0.0);
    let pal = [Rgb::BLACK, red, red];
    assert_eq!(nearest_color(Rgb::new(0.9, 0.0, 0.0), &pal), red);
}

#[test]
fn empty_palette_passes_color_through() {
    let c = Rgb::new(0.3, 0.7, -0.2);
    assert_eq!(nearest_color(c, &[]), c);
}

#[test]
fn out_of_range_input_still_snaps() {
    assert_eq!(nearest_color(Rgb::gray(1.8), &BW), Rgb::WHITE);
    assert_eq!(nearest_color(Rgb::gray(-0.7), &BW), Rgb::BLACK);
}
