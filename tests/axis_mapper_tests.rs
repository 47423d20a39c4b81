use approx::assert_abs_diff_eq;
use heart_rate_chart::core::{AxisMapper, PlotArea, PlotInsets, ScaleBounds, Viewport};

fn mapper(points: usize) -> AxisMapper {
    let plot = PlotArea::new(100.0, 700.0, 50.0, 450.0).expect("plot");
    AxisMapper::new(plot, ScaleBounds::fixed(), points).expect("mapper")
}

#[test]
fn index_to_pixel_spreads_points_evenly_edge_to_edge() {
    let mapper = mapper(7);

    assert_eq!(mapper.index_to_pixel_x(0).expect("first"), 100.0);
    assert_eq!(mapper.index_to_pixel_x(6).expect("last"), 700.0);
    assert_abs_diff_eq!(mapper.index_to_pixel_x(3).expect("mid"), 400.0, epsilon = 1e-9);
    assert!(mapper.index_to_pixel_x(7).is_err());
}

#[test]
fn single_point_is_centred() {
    let mapper = mapper(1);
    assert_abs_diff_eq!(mapper.index_to_pixel_x(0).expect("only"), 400.0, epsilon = 1e-9);
}

#[test]
fn value_axis_puts_min_at_bottom_and_max_at_top() {
    let mapper = mapper(7);

    assert_abs_diff_eq!(mapper.value_to_pixel_y(80.0), 450.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapper.value_to_pixel_y(160.0), 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapper.value_to_pixel_y(120.0), 250.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapper.pixel_y_to_value(250.0), 120.0, epsilon = 1e-9);
}

#[test]
fn pixel_fraction_is_clamped() {
    let mapper = mapper(24);

    assert_eq!(mapper.pixel_x_to_fraction(0.0), 0.0);
    assert_eq!(mapper.pixel_x_to_fraction(900.0), 1.0);
    assert_abs_diff_eq!(mapper.pixel_x_to_fraction(400.0), 0.5, epsilon = 1e-12);
}

#[test]
fn day_segment_position_spans_twenty_three_hours() {
    let mapper = mapper(24);

    assert_eq!(mapper.pixel_x_to_segment_position(100.0), 0.0);
    assert_abs_diff_eq!(mapper.pixel_x_to_segment_position(700.0), 23.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mapper.pixel_x_to_segment_position(400.0), 11.5, epsilon = 1e-12);
}

#[test]
fn degenerate_geometry_is_rejected() {
    assert!(PlotArea::new(10.0, 10.0, 0.0, 100.0).is_err());
    assert!(PlotArea::new(0.0, 100.0, 50.0, 20.0).is_err());
    assert!(PlotArea::new(f64::NAN, 100.0, 0.0, 100.0).is_err());
    assert!(ScaleBounds::new(100.0, 100.0).is_err());
    assert!(PlotArea::from_viewport(Viewport::new(40, 40), PlotInsets::default()).is_err());
}

#[test]
fn test_bounds_pad_and_clamp_at_zero() {
    let bounds = ScaleBounds::padded(&[75.0, 80.0], 10.0).expect("bounds");
    assert_eq!(bounds, ScaleBounds { min: 65.0, max: 90.0 });

    let low = ScaleBounds::padded(&[4.5, 60.2], 10.0).expect("bounds");
    assert_eq!(low, ScaleBounds { min: 0.0, max: 71.0 });

    assert!(ScaleBounds::padded(&[], 10.0).is_none());
}

#[test]
fn ticks_cover_bounds_at_step() {
    let ticks = ScaleBounds::fixed().ticks(10.0, 16);
    assert_eq!(ticks.first(), Some(&80.0));
    assert_eq!(ticks.last(), Some(&160.0));
    assert_eq!(ticks.len(), 9);
}

#[test]
fn ticks_widen_step_to_respect_cap() {
    let ticks = ScaleBounds::fixed().ticks(10.0, 5);
    assert_eq!(ticks, vec![80.0, 100.0, 120.0, 140.0, 160.0]);

    let wide = ScaleBounds::new(65.0, 1e300).expect("bounds").ticks(10.0, 12);
    assert!(!wide.is_empty());
    assert!(wide.len() <= 12);
    assert!(wide.iter().all(|tick| tick.is_finite()));
}

#[test]
fn ticks_terminate_beyond_integer_precision() {
    let bounds = ScaleBounds::new(1e18, 1e18 + 4096.0).expect("bounds");
    let ticks = bounds.ticks(10.0, 12);

    assert!(!ticks.is_empty());
    assert!(ticks.len() <= 12);
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn padded_single_value_stays_valid_at_any_magnitude() {
    for value in [0.5, 72.0, 9.007_199_254_740_993e15, 1e300] {
        let bounds = ScaleBounds::padded(&[value], 10.0).expect("bounds");
        bounds.validate().expect("valid bounds");
        assert!(bounds.min <= value && bounds.max >= value, "{value}");
    }
}
