use heart_rate_chart::api::{HeartRateChart, HeartRateChartConfig};
use heart_rate_chart::core::{RangeKey, Viewport};
use heart_rate_chart::interaction::HoverState;
use heart_rate_chart::render::NullRenderer;

fn chart() -> HeartRateChart<NullRenderer> {
    let config = HeartRateChartConfig::new(Viewport::new(800, 400)).with_month_seed(11);
    HeartRateChart::new(NullRenderer::default(), config).expect("chart init")
}

fn plot_center_y(chart: &HeartRateChart<NullRenderer>) -> f64 {
    let plot = chart.plot_area();
    (plot.top + plot.bottom) / 2.0
}

#[test]
fn chart_starts_on_week_with_latest_day_selected() {
    let chart = chart();

    assert_eq!(chart.range(), RangeKey::Week);
    assert_eq!(chart.active_series().len(), 7);
    assert_eq!(chart.day_cursor().index(), chart.day_cursor().len() - 1);
    assert_eq!(chart.hover_state(), &HoverState::NoHover);
}

#[test]
fn day_navigation_clamps_at_bounds() {
    let mut chart = chart();
    chart.set_range(RangeKey::Day);

    let last = chart.day_cursor().len() - 1;
    assert!(!chart.go_next_day());
    assert_eq!(chart.day_cursor().index(), last);

    while chart.go_prev_day() {}
    assert_eq!(chart.day_cursor().index(), 0);
    assert!(!chart.go_prev_day());
    assert_eq!(chart.day_cursor().index(), 0);
}

#[test]
fn day_navigation_switches_active_snapshot() {
    let mut chart = chart();
    chart.set_range(RangeKey::Day);
    let latest = chart.active_series().clone();

    assert!(chart.go_prev_day());
    assert_ne!(chart.active_series(), &latest);
    assert_eq!(chart.active_series().len(), 24);
}

#[test]
fn pointer_move_then_leave_toggles_tooltip() {
    let mut chart = chart();
    let plot = chart.plot_area();
    let y = plot_center_y(&chart);

    chart.pointer_move(plot.left + 1.0, y);
    let point = chart.hover_state().point().expect("tooltip visible").clone();
    assert_eq!(point.index, 0);
    assert_eq!(point.label, "Sun");

    chart.pointer_leave();
    assert_eq!(chart.hover_state(), &HoverState::NoHover);
    assert!(chart.cursor().is_none());
}

#[test]
fn pointer_outside_plot_hides_tooltip() {
    let mut chart = chart();
    let plot = chart.plot_area();
    let y = plot_center_y(&chart);

    chart.pointer_move(plot.left + 5.0, y);
    assert!(chart.hover_state().is_visible());

    chart.pointer_move(plot.left - 5.0, y);
    assert_eq!(chart.hover_state(), &HoverState::NoHover);
    assert_eq!(chart.cursor(), Some((plot.left - 5.0, y)));
}

#[test]
fn range_switch_and_day_navigation_clear_hover() {
    let mut chart = chart();
    let plot = chart.plot_area();
    let y = plot_center_y(&chart);

    chart.pointer_move(plot.left + 10.0, y);
    assert!(chart.hover_state().is_visible());
    chart.set_range(RangeKey::Day);
    assert!(!chart.hover_state().is_visible());

    chart.pointer_move(plot.left + 10.0, y);
    assert!(chart.hover_state().is_visible());
    assert!(chart.go_prev_day());
    assert!(!chart.hover_state().is_visible());
}

#[test]
fn day_hover_uses_free_horizontal_position() {
    let mut chart = chart();
    chart.set_range(RangeKey::Day);
    let plot = chart.plot_area();
    let x = plot.left + plot.width() * 0.4;

    chart.pointer_move(x, plot_center_y(&chart));
    let point = chart.hover_state().point().expect("tooltip visible");
    assert_eq!(point.x, x);
    assert!(point.label.contains(':'));
}

#[test]
fn month_values_survive_repeated_renders() {
    let mut chart = chart();
    chart.set_range(RangeKey::Month);
    let before = chart.active_series().clone();

    for _ in 0..3 {
        chart.render().expect("render");
        chart.set_range(RangeKey::Week);
        chart.set_range(RangeKey::Month);
    }
    assert_eq!(chart.active_series(), &before);
}

#[test]
fn fixed_ranges_use_fixed_bounds() {
    let mut chart = chart();
    for range in [RangeKey::Day, RangeKey::Week, RangeKey::Month] {
        chart.set_range(range);
        let bounds = chart.scale_bounds();
        assert_eq!((bounds.min, bounds.max), (80.0, 160.0));
    }
}

#[test]
fn value_box_prefers_hovered_value() {
    let mut chart = chart();
    assert_eq!(chart.value_box_text(), "Heart Rate: 120");

    let plot = chart.plot_area();
    chart.pointer_move(plot.left, plot_center_y(&chart));
    assert_eq!(chart.value_box_text(), "Heart Rate: 112");

    chart.set_range(RangeKey::Test);
    assert_eq!(chart.value_box_text(), "Heart Rate: --");
}

#[test]
fn invalid_viewport_is_rejected() {
    let config = HeartRateChartConfig::new(Viewport::new(0, 0));
    assert!(HeartRateChart::new(NullRenderer::default(), config).is_err());

    let mut chart = chart();
    assert!(chart.set_viewport(Viewport::new(0, 10)).is_err());
    chart.set_viewport(Viewport::new(1024, 600)).expect("resize");
    assert_eq!(chart.plot_area().right, 1024.0 - 16.0);
}

#[test]
fn pointer_input_after_teardown_is_ignored() {
    let mut chart = chart();
    let plot = chart.plot_area();
    chart.teardown();

    chart.pointer_move(plot.left + 10.0, plot_center_y(&chart));

    assert_eq!(chart.hover_state(), &HoverState::NoHover);
    assert!(chart.cursor().is_none());
}
