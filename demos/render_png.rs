use heart_rate_chart::api::{HeartRateChart, HeartRateChartConfig};
use heart_rate_chart::core::{RangeKey, Viewport};
use heart_rate_chart::data::StaticSampleSource;
use heart_rate_chart::render::CairoRenderer;

const RECORDING: &str = include_str!("data/test_recording.csv");

/// Renders each tab with a tooltip into `target/heart-rate-<tab>.png`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let viewport = Viewport::new(800, 420);
    let renderer = CairoRenderer::new(viewport.width as i32, viewport.height as i32)?;
    let config = HeartRateChartConfig::new(viewport).with_month_seed(7);
    let mut chart = HeartRateChart::new(renderer, config)?;
    chart.load_test_series(&StaticSampleSource::new(RECORDING));

    let plot = chart.plot_area();
    for range in RangeKey::ALL {
        chart.set_range(range);
        chart.pointer_move(plot.left + plot.width() * 0.42, plot.top + 40.0);
        chart.render()?;

        let path = format!("target/heart-rate-{}.png", range.title().to_lowercase());
        chart.renderer().write_png(&path)?;
        println!("{path}: {:?}", chart.renderer().last_stats());
    }
    Ok(())
}
