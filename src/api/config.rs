use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TEST_PADDING, PlotArea, PlotInsets, RangeKey, ScaleBounds, Viewport};
use crate::error::{ChartError, ChartResult};

use super::render_style::{RenderStyle, validate_render_style};

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a JSON file. Every field
/// except `viewport` has a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub plot_insets: PlotInsets,
    #[serde(default)]
    pub initial_range: RangeKey,
    /// Last day covered by the Day/Week/Month datasets.
    #[serde(default = "default_anchor_date")]
    pub anchor_date: NaiveDate,
    /// Seed for the Month generator. `None` seeds from OS entropy.
    #[serde(default)]
    pub month_seed: Option<u64>,
    #[serde(default)]
    pub fixed_bounds: ScaleBounds,
    #[serde(default = "default_test_bounds_padding")]
    pub test_bounds_padding: f64,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl HeartRateChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            plot_insets: PlotInsets::default(),
            initial_range: RangeKey::default(),
            anchor_date: default_anchor_date(),
            month_seed: None,
            fixed_bounds: ScaleBounds::fixed(),
            test_bounds_padding: default_test_bounds_padding(),
            render_style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_plot_insets(mut self, insets: PlotInsets) -> Self {
        self.plot_insets = insets;
        self
    }

    #[must_use]
    pub fn with_initial_range(mut self, range: RangeKey) -> Self {
        self.initial_range = range;
        self
    }

    #[must_use]
    pub fn with_anchor_date(mut self, anchor_date: NaiveDate) -> Self {
        self.anchor_date = anchor_date;
        self
    }

    /// Makes the Month series reproducible.
    #[must_use]
    pub fn with_month_seed(mut self, seed: u64) -> Self {
        self.month_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_fixed_bounds(mut self, bounds: ScaleBounds) -> Self {
        self.fixed_bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_test_bounds_padding(mut self, padding: f64) -> Self {
        self.test_bounds_padding = padding;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    /// Resolves the plotted rectangle, failing when insets swallow the viewport.
    pub fn plot_area(self) -> ChartResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.plot_insets)
    }

    pub fn validate(self) -> ChartResult<()> {
        self.plot_area()?;
        self.fixed_bounds.validate()?;
        if !self.test_bounds_padding.is_finite() || self.test_bounds_padding < 0.0 {
            return Err(ChartError::InvalidData(
                "test bounds padding must be finite and >= 0".to_owned(),
            ));
        }
        validate_render_style(self.render_style)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Parse(format!("chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 23).unwrap_or_default()
}

fn default_test_bounds_padding() -> f64 {
    DEFAULT_TEST_PADDING
}
