use tracing::debug;

use crate::core::{AxisMapper, PlotArea, RangeKey, ScaleBounds, Series, Viewport};
use crate::data::{DatasetProvider, DayCursor, resolve_active_series};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, InteractionState};
use crate::render::Renderer;

use super::test_data_controller::TestLoadState;
use super::{HeartRateChartConfig, RenderStyle};

/// Heart-rate chart state container.
///
/// All UI state lives here and is mutated only through one entry point per
/// host event: `set_range`, `go_prev_day`/`go_next_day`, `pointer_move`,
/// `pointer_leave`, and `complete_test_load`. Rendering is a pure function of
/// this state.
pub struct HeartRateChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: HeartRateChartConfig,
    pub(super) plot: PlotArea,
    pub(super) provider: DatasetProvider,
    pub(super) range: RangeKey,
    pub(super) day_cursor: DayCursor,
    pub(super) test_series: Series,
    pub(super) test_load: TestLoadState,
    pub(super) load_generation: u64,
    pub(super) torn_down: bool,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> HeartRateChart<R> {
    pub fn new(renderer: R, config: HeartRateChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let plot = config.plot_area()?;
        let provider = DatasetProvider::new(config.anchor_date, config.month_seed)?;
        let day_cursor = provider.day_cursor();

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            range = ?config.initial_range,
            "heart-rate chart created"
        );

        Ok(Self {
            renderer,
            config,
            plot,
            provider,
            range: config.initial_range,
            day_cursor,
            test_series: Series::empty(),
            test_load: TestLoadState::NotStarted,
            load_generation: 0,
            torn_down: false,
            interaction: InteractionState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &HeartRateChartConfig {
        &self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.config.render_style
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    /// Resizes the chart. The tooltip is dropped because pixel anchors moved.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let plot = PlotArea::from_viewport(viewport, self.config.plot_insets)?;
        self.config.viewport = viewport;
        self.plot = plot;
        self.interaction.clear_hover();
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        Ok(())
    }

    #[must_use]
    pub fn provider(&self) -> &DatasetProvider {
        &self.provider
    }

    #[must_use]
    pub fn range(&self) -> RangeKey {
        self.range
    }

    #[must_use]
    pub fn day_cursor(&self) -> DayCursor {
        self.day_cursor
    }

    /// The series for the current range and day.
    #[must_use]
    pub fn active_series(&self) -> &Series {
        resolve_active_series(&self.provider, self.range, self.day_cursor, &self.test_series)
    }

    /// Vertical bounds for the current range.
    ///
    /// Test bounds follow the loaded data. An empty Test series, or one whose
    /// padded bounds are not representable, uses the fixed bounds.
    #[must_use]
    pub fn scale_bounds(&self) -> ScaleBounds {
        match self.range {
            RangeKey::Test => {
                ScaleBounds::padded(self.test_series.values(), self.config.test_bounds_padding)
                    .filter(|bounds| bounds.validate().is_ok())
                    .unwrap_or(self.config.fixed_bounds)
            }
            RangeKey::Day | RangeKey::Week | RangeKey::Month => self.config.fixed_bounds,
        }
    }

    pub fn axis_mapper(&self) -> ChartResult<AxisMapper> {
        AxisMapper::new(self.plot, self.scale_bounds(), self.active_series().len())
    }

    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.interaction.cursor()
    }

    #[must_use]
    pub fn date_tag(&self) -> String {
        self.provider.date_tag(self.range, self.day_cursor)
    }

    /// Text for the value box under the chart: hovered value, else latest value.
    #[must_use]
    pub fn value_box_text(&self) -> String {
        let value = self
            .hover_state()
            .point()
            .map(|point| point.value)
            .or_else(|| self.active_series().last_value());
        match value {
            Some(value) => format!("Heart Rate: {}", format_bpm(value)),
            None => "Heart Rate: --".to_owned(),
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

pub(super) fn format_bpm(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
