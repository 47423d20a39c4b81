use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for the heart-rate frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background_color: Color,
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub point_radius: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub title_font_size_px: f64,
    pub tab_active_color: Color,
    pub tab_inactive_color: Color,
    pub tab_active_text_color: Color,
    pub tooltip_background_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    /// Gap between the hovered point and the bottom of the tooltip body.
    pub tooltip_offset_px: f64,
    pub value_tick_step: f64,
    /// Upper bound on x-axis labels; denser series show every n-th label.
    pub max_x_labels: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let accent = Color::from_rgb_hex(0xFF6C84);
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            series_line_color: accent,
            series_line_width: 2.0,
            point_radius: 5.0,
            grid_line_color: Color::from_rgb_hex(0xE6E6E6),
            grid_line_width: 1.0,
            axis_label_color: Color::from_rgb_hex(0x6B6B6B),
            axis_label_font_size_px: 11.0,
            title_font_size_px: 18.0,
            tab_active_color: accent,
            tab_inactive_color: Color::from_rgb_hex(0xEFEFEF),
            tab_active_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_background_color: Color::from_rgb_hex(0x222222).with_alpha(0.9),
            tooltip_text_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_font_size_px: 12.0,
            tooltip_offset_px: 14.0,
            value_tick_step: 10.0,
            max_x_labels: 8,
        }
    }
}

pub(crate) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    for color in [
        style.background_color,
        style.series_line_color,
        style.grid_line_color,
        style.axis_label_color,
        style.tab_active_color,
        style.tab_inactive_color,
        style.tab_active_text_color,
        style.tooltip_background_color,
        style.tooltip_text_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("series_line_width", style.series_line_width),
        ("point_radius", style.point_radius),
        ("grid_line_width", style.grid_line_width),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("title_font_size_px", style.title_font_size_px),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
        ("value_tick_step", style.value_tick_step),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    if !style.tooltip_offset_px.is_finite() || style.tooltip_offset_px < 0.0 {
        return Err(ChartError::InvalidData(
            "render style `tooltip_offset_px` must be finite and >= 0".to_owned(),
        ));
    }
    if style.max_x_labels == 0 {
        return Err(ChartError::InvalidData(
            "render style `max_x_labels` must be > 0".to_owned(),
        ));
    }
    Ok(())
}
