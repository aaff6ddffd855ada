use super::*;

#[test]
fn manual_ticker_yields_scripted_times_then_ends() {
    let mut t = ManualTicker::new([0.0, 0.5, 2.0]);
    assert_eq!(t.wait_tick(), Some(0.0));
    assert_eq!(t.wait_tick(), Some(0.5));
    assert_eq!(t.remaining(), 1);
    assert_eq!(t.wait_tick(), Some(2.0));
    assert_eq!(t.wait_tick(), None);
}

#[test]
fn manual_ticker_at_fps_spaces_ticks() {
    let mut t = ManualTicker::at_fps(4.0, 3);
    assert_eq!(t.wait_tick(), Some(0.0));
    assert_eq!(t.wait_tick(), Some(0.25));
    assert_eq!(t.wait_tick(), Some(0.5));
    assert_eq!(t.wait_tick(), None);
}

#[test]
fn interval_ticker_rejects_bad_rates() {
    assert!(IntervalTicker::new(0.0).is_err());
    assert!(IntervalTicker::new(-3.0).is_err());
    assert!(IntervalTicker::new(f64::NAN).is_err());
}

#[test]
fn interval_ticker_rejects_rates_without_a_finite_period() {
    assert!(IntervalTicker::new(f64::INFINITY).is_err());
    assert!(IntervalTicker::new(1e-320).is_err());
    assert!(IntervalTicker::new(1e-30).is_err());
}

#[test]
fn run_limit_rejects_values_outside_duration_range() {
    assert!(IntervalTicker::new(60.0).unwrap().with_limit(f64::INFINITY).is_err());
    assert!(IntervalTicker::new(60.0).unwrap().with_limit(f64::NAN).is_err());
    assert!(IntervalTicker::new(60.0).unwrap().with_limit(1e30).is_err());
    let mut t = IntervalTicker::new(60.0).unwrap().with_limit(-5.0).unwrap();
    assert_eq!(t.wait_tick(), None);
}

#[test]
fn interval_ticker_times_increase_and_respect_limit() {
    let mut t = IntervalTicker::new(200.0).unwrap().with_limit(0.05).unwrap();
    let mut last = -1.0;
    let mut ticks = 0;
    while let Some(s) = t.wait_tick() {
        assert!(s >= last);
        last = s;
        ticks += 1;
        assert!(ticks < 1000);
    }
    assert!(ticks >= 2);
}

#[test]
fn default_interval_is_sixty_hz() {
    let t = IntervalTicker::default();
    let p = t.period().as_secs_f64();
    assert!((p - 1.0 / 60.0).abs() < 1e-6);
}
