use approx::assert_abs_diff_eq;
use heart_rate_chart::core::{AxisMapper, PlotArea, RangeKey, ScaleBounds, Series};
use heart_rate_chart::interaction::{
    HoverState, clock_label, resolve_free_hover, resolve_hover, resolve_nearest_snap,
};

/// 24 hourly values `100, 110, ..., 330` over a plot where one hour is 10 px.
fn day_fixture() -> (Series, AxisMapper) {
    let values: Vec<f64> = (0..24).map(|h| 100.0 + 10.0 * f64::from(h)).collect();
    let labels = (0..24).map(|h| format!("{h}:00")).collect();
    let series = Series::new(labels, values).expect("day series");
    let plot = PlotArea::new(0.0, 230.0, 0.0, 200.0).expect("plot");
    let mapper = AxisMapper::new(plot, ScaleBounds::new(80.0, 340.0).expect("bounds"), 24)
        .expect("mapper");
    (series, mapper)
}

fn week_fixture() -> (Series, AxisMapper) {
    let labels = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    let series = Series::new(labels, vec![112.0, 115.0, 118.0, 135.0, 122.0, 118.0, 120.0])
        .expect("week series");
    let plot = PlotArea::new(100.0, 700.0, 50.0, 450.0).expect("plot");
    let mapper = AxisMapper::new(plot, ScaleBounds::fixed(), 7).expect("mapper");
    (series, mapper)
}

fn expect_hover(state: HoverState) -> heart_rate_chart::interaction::HoverPoint {
    match state {
        HoverState::Hover(point) => point,
        HoverState::NoHover => panic!("expected a visible tooltip"),
    }
}

#[test]
fn day_hover_interpolates_half_hour() {
    let (series, mapper) = day_fixture();

    let point = expect_hover(resolve_hover(RangeKey::Day, &series, mapper, 55.0, 10.0));

    let expected = (series.values()[5] * 0.5 + series.values()[6] * 0.5).round();
    assert_eq!(point.value, expected);
    assert_eq!(point.label, "5:30");
    assert_eq!(point.index, 5);
    assert_eq!(point.x, 55.0);
    assert_abs_diff_eq!(point.y, mapper.value_to_pixel_y(expected), epsilon = 1e-9);
}

#[test]
fn day_hover_carries_sixty_minutes_into_next_hour() {
    let (series, mapper) = day_fixture();

    let point = expect_hover(resolve_hover(RangeKey::Day, &series, mapper, 229.99, 10.0));

    assert_eq!(point.label, "23:00");
    assert_eq!(point.value, 330.0);
}

#[test]
fn day_hover_at_right_edge_repeats_last_value() {
    let (series, mapper) = day_fixture();

    let point = expect_hover(resolve_free_hover(&series, mapper, 230.0));

    assert_eq!(point.index, 23);
    assert_eq!(point.value, 330.0);
    assert_eq!(point.label, "23:00");
}

#[test]
fn day_hover_on_empty_series_is_hidden() {
    let (_, mapper) = day_fixture();
    let empty = Series::empty();

    assert_eq!(
        resolve_hover(RangeKey::Day, &empty, mapper, 55.0, 10.0),
        HoverState::NoHover
    );
}

#[test]
fn pointer_outside_plot_is_hidden_for_every_range() {
    let (series, mapper) = week_fixture();

    for range in RangeKey::ALL {
        for x in [99.999, 700.001, -50.0, 10_000.0] {
            assert_eq!(
                resolve_hover(range, &series, mapper, x, 200.0),
                HoverState::NoHover,
                "{range:?} at x={x}"
            );
        }
    }
}

#[test]
fn non_finite_pointer_is_hidden() {
    let (series, mapper) = week_fixture();
    assert_eq!(
        resolve_hover(RangeKey::Week, &series, mapper, f64::NAN, 10.0),
        HoverState::NoHover
    );
    assert_eq!(
        resolve_hover(RangeKey::Week, &series, mapper, 200.0, f64::INFINITY),
        HoverState::NoHover
    );
}

#[test]
fn nearest_snap_uses_point_coordinates() {
    let (series, mapper) = week_fixture();
    let wed_x = mapper.index_to_pixel_x(3).expect("x");

    let point = expect_hover(resolve_hover(RangeKey::Week, &series, mapper, wed_x + 20.0, 0.0));

    assert_eq!(point.index, 3);
    assert_eq!(point.label, "Wed");
    assert_eq!(point.value, 135.0);
    assert_eq!(point.x, wed_x);
    assert_abs_diff_eq!(point.y, mapper.value_to_pixel_y(135.0), epsilon = 1e-9);
}

#[test]
fn equidistant_pointer_prefers_lower_index() {
    let (series, mapper) = week_fixture();
    let x2 = mapper.index_to_pixel_x(2).expect("x2");
    let x3 = mapper.index_to_pixel_x(3).expect("x3");

    for range in [RangeKey::Week, RangeKey::Month, RangeKey::Test] {
        let point = expect_hover(resolve_hover(range, &series, mapper, (x2 + x3) / 2.0, 0.0));
        assert_eq!(point.index, 2, "{range:?}");
    }
}

#[test]
fn nearest_snap_on_empty_series_is_hidden() {
    let (_, mapper) = week_fixture();
    assert_eq!(
        resolve_nearest_snap(&Series::empty(), mapper, 300.0),
        HoverState::NoHover
    );
}

#[test]
fn clock_label_pads_minutes() {
    assert_eq!(clock_label(7, 0.0), "7:00");
    assert_eq!(clock_label(7, 0.05), "7:03");
    assert_eq!(clock_label(7, 0.75), "7:45");
    assert_eq!(clock_label(22, 0.9999), "23:00");
}
