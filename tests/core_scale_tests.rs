use gantt_rs::core::{Interval, LinearScale, TimeDomain, TimeScale};

#[test]
fn linear_scale_maps_and_inverts_without_clamp() {
    let scale = LinearScale::new((0.0, 100.0), (10.0, 210.0)).expect("valid scale");
    assert!(!scale.is_clamped());

    assert!((scale.map(50.0) - 110.0).abs() <= 1e-9);
    assert!((scale.map(150.0) - 310.0).abs() <= 1e-9);
    assert!((scale.invert(110.0) - 50.0).abs() <= 1e-9);
}

#[test]
fn linear_scale_rejects_degenerate_inputs() {
    assert!(LinearScale::new((1.0, 1.0), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (5.0, 5.0)).is_err());
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 100.0)).is_err());
}

#[test]
fn time_scale_clamps_both_directions() {
    let scale =
        TimeScale::new(TimeDomain::new(1_000.0, 2_000.0), 80.0, 920.0).expect("time scale");

    assert!((scale.to_pixel(1_500.0) - 500.0).abs() <= 1e-9);
    assert!((scale.to_pixel(0.0) - 80.0).abs() <= 1e-9);
    assert!((scale.to_pixel(9_999.0) - 920.0).abs() <= 1e-9);

    assert!((scale.to_time(500.0) - 1_500.0).abs() <= 1e-9);
    assert!((scale.to_time(-40.0) - 1_000.0).abs() <= 1e-9);
    assert!((scale.to_time(5_000.0) - 2_000.0).abs() <= 1e-9);
}

#[test]
fn time_scale_widens_zero_span_domain() {
    let scale = TimeScale::new(TimeDomain::new(60.0, 60.0), 0.0, 100.0).expect("time scale");
    let domain = scale.domain();
    assert!((domain.min_date - 59.5).abs() <= 1e-9);
    assert!((domain.max_date - 60.5).abs() <= 1e-9);
    assert!((scale.to_pixel(60.0) - 50.0).abs() <= 1e-9);
}

#[test]
fn time_scale_rejects_non_finite_domain() {
    assert!(TimeScale::new(TimeDomain::new(0.0, f64::INFINITY), 0.0, 100.0).is_err());
}

#[test]
fn bar_width_follows_projection_and_clamps_past_domain() {
    let scale = TimeScale::new(TimeDomain::new(0.0, 1_000.0), 0.0, 500.0).expect("time scale");

    let inside = Interval::new("A", 100.0, 300.0).expect("interval");
    assert!((scale.bar_width(&inside) - 100.0).abs() <= 1e-9);

    let overflowing = Interval::new("A", 900.0, 1_500.0).expect("interval");
    assert!((scale.bar_width(&overflowing) - 50.0).abs() <= 1e-9);
}

#[test]
fn pixel_shift_keeps_offset_of_times_outside_domain() {
    // Two seconds per pixel.
    let scale = TimeScale::new(TimeDomain::new(0.0, 1_000.0), 0.0, 500.0).expect("time scale");

    assert!((scale.shift_by_pixels(100.0, 10.0) - 120.0).abs() <= 1e-9);
    assert!((scale.shift_by_pixels(900.0, 100.0) - 1_000.0).abs() <= 1e-9);
    assert!((scale.shift_by_pixels(50.0, -100.0) - 0.0).abs() <= 1e-9);

    assert_eq!(scale.shift_by_pixels(1_500.0, 0.0), 1_500.0);
    assert!((scale.shift_by_pixels(1_500.0, -10.0) - 1_480.0).abs() <= 1e-9);
    assert_eq!(scale.shift_by_pixels(1_500.0, 10.0), 1_500.0);
}
