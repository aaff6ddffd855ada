use super::*;
use crate::config::model::SourceKind;

#[test]
fn pointer_defaults_to_origin() {
    assert_eq!(PointerInput::new().get(), Point::ORIGIN);
}

#[test]
fn last_write_wins() {
    let p = PointerInput::new();
    p.set(0.25, 0.75);
    p.set(0.5, 0.125);
    assert_eq!(p.get(), Point::new(0.5, 0.125));
}

#[test]
fn clones_share_the_slot() {
    let p = PointerInput::new();
    let writer = p.clone();
    std::thread::spawn(move || writer.set(1.0, 0.5))
        .join()
        .unwrap();
    assert_eq!(p.get(), Point::new(1.0, 0.5));
}

#[test]
fn positions_are_clamped() {
    let p = PointerInput::new();
    p.set(-2.0, 7.0);
    assert_eq!(p.get(), Point::new(0.0, 1.0));
    p.set(f64::NAN, 0.5);
    assert_eq!(p.get(), Point::new(0.0, 0.5));
}

#[test]
fn surface_pixels_flip_y() {
    assert_eq!(from_surface_px(0.0, 0.0, 200, 100), Point::new(0.0, 1.0));
    assert_eq!(from_surface_px(200.0, 100.0, 200, 100), Point::new(1.0, 0.0));
    assert_eq!(from_surface_px(50.0, 25.0, 200, 100), Point::new(0.25, 0.75));
    let p = PointerInput::new();
    p.set_surface_px(100.0, 50.0, 200, 100);
    assert_eq!(p.get(), Point::new(0.5, 0.5));
}

#[test]
fn config_handle_replaces_whole_snapshots() {
    let h = ConfigHandle::new(Configuration::default());
    let before = h.snapshot();
    h.update(|c| c.source = SourceKind::Generator);
    assert_eq!(before.source, SourceKind::Image);
    assert_eq!(h.snapshot().source, SourceKind::Generator);

    let mut next = Configuration::default();
    next.pixel_scale = 12;
    h.replace(next);
    assert_eq!(h.snapshot().pixel_scale, 12);
    assert_eq!(before.pixel_scale, 6);
}
