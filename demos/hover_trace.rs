use heart_rate_chart::api::{HeartRateChart, HeartRateChartConfig};
use heart_rate_chart::core::{RangeKey, Viewport};
use heart_rate_chart::data::{FileSampleSource, SampleSource, StaticSampleSource};
use heart_rate_chart::render::NullRenderer;
use heart_rate_chart::telemetry::init_default_tracing;

const FALLBACK_RECORDING: &str = include_str!("data/test_recording.csv");

/// Sweeps the pointer across each tab and prints the tooltip it resolves.
///
/// Pass a CSV path to load your own Test recording:
/// `cargo run --example hover_trace --features telemetry -- my.csv`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_default_tracing();

    let config = HeartRateChartConfig::new(Viewport::new(800, 420)).with_month_seed(2025);
    let mut chart = HeartRateChart::new(NullRenderer::default(), config)?;

    let source: Box<dyn SampleSource> = match std::env::args().nth(1) {
        Some(path) => Box::new(FileSampleSource::new(path)),
        None => Box::new(StaticSampleSource::new(FALLBACK_RECORDING)),
    };
    chart.load_test_series(source.as_ref());
    println!("test load: {:?}", chart.test_load_state());

    let plot = chart.plot_area();
    let y = plot.top + plot.height() / 2.0;
    for range in RangeKey::ALL {
        chart.set_range(range);
        println!("== {} ({})", range.title(), chart.date_tag());
        for step in 0..=8 {
            let x = plot.left + plot.width() * f64::from(step) / 8.0;
            chart.pointer_move(x, y);
            match chart.hover_state().point() {
                Some(point) => println!(
                    "  x={x:7.1} -> {:>5} bpm at {:<6} (anchor {:.1},{:.1})",
                    point.value, point.label, point.x, point.y
                ),
                None => println!("  x={x:7.1} -> no tooltip"),
            }
            chart.render()?;
        }
        chart.pointer_leave();
    }

    chart.set_range(RangeKey::Day);
    while chart.go_prev_day() {}
    println!("earliest day: {}", chart.date_tag());

    println!("{}", chart.snapshot().to_json_contract_v1_pretty()?);
    chart.teardown();
    Ok(())
}
