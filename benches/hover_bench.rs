use criterion::{Criterion, criterion_group, criterion_main};
use heart_rate_chart::api::{HeartRateChart, HeartRateChartConfig};
use heart_rate_chart::core::{AxisMapper, PlotArea, RangeKey, ScaleBounds, Series, Viewport};
use heart_rate_chart::data::parse_heart_rate_csv;
use heart_rate_chart::interaction::resolve_hover;
use heart_rate_chart::render::NullRenderer;
use std::hint::black_box;

fn bench_day_free_hover(c: &mut Criterion) {
    let values: Vec<f64> = (0..24).map(|h| 60.0 + f64::from(h % 12) * 5.0).collect();
    let labels = (0..24).map(|h| format!("{h}:00")).collect();
    let series = Series::new(labels, values).expect("valid series");
    let plot = PlotArea::new(48.0, 1904.0, 96.0, 1008.0).expect("valid plot");
    let mapper = AxisMapper::new(plot, ScaleBounds::fixed(), series.len()).expect("valid mapper");

    c.bench_function("day_free_hover", |b| {
        b.iter(|| {
            let _ = resolve_hover(
                black_box(RangeKey::Day),
                black_box(&series),
                black_box(mapper),
                black_box(1_013.7),
                black_box(400.0),
            );
        })
    });
}

fn bench_nearest_snap_5k(c: &mut Criterion) {
    let values: Vec<f64> = (0..5_000).map(|i| 70.0 + f64::from(i % 40)).collect();
    let labels = (0..5_000).map(|i| format!("{i}s")).collect();
    let series = Series::new(labels, values).expect("valid series");
    let plot = PlotArea::new(48.0, 1904.0, 96.0, 1008.0).expect("valid plot");
    let mapper = AxisMapper::new(plot, ScaleBounds::fixed(), series.len()).expect("valid mapper");

    c.bench_function("nearest_snap_5k", |b| {
        b.iter(|| {
            let _ = resolve_hover(
                black_box(RangeKey::Test),
                black_box(&series),
                black_box(mapper),
                black_box(1_013.7),
                black_box(400.0),
            );
        })
    });
}

fn bench_csv_parse_5k(c: &mut Criterion) {
    let mut text = String::from("time_s,heart_rate\n");
    for i in 0..5_000 {
        text.push_str(&format!("{i},{}\n", 60 + i % 50));
    }

    c.bench_function("csv_parse_5k", |b| {
        b.iter(|| {
            let _ = parse_heart_rate_csv(black_box(&text));
        })
    });
}

fn bench_month_frame_with_tooltip(c: &mut Criterion) {
    let config = HeartRateChartConfig::new(Viewport::new(1920, 1080))
        .with_month_seed(1)
        .with_initial_range(RangeKey::Month);
    let mut chart = HeartRateChart::new(NullRenderer::default(), config).expect("chart init");
    let plot = chart.plot_area();
    chart.pointer_move(plot.left + plot.width() / 3.0, plot.top + 50.0);

    c.bench_function("month_frame_with_tooltip", |b| {
        b.iter(|| {
            let _ = chart.build_render_frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_day_free_hover,
    bench_nearest_snap_5k,
    bench_csv_parse_5k,
    bench_month_frame_with_tooltip
);
criterion_main!(benches);
