use crate::core::{AxisMapper, RangeKey, Viewport};
use crate::error::ChartResult;
use crate::interaction::HoverPoint;
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TooltipOverlay,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::HeartRateChart;
use super::RenderStyle;
use super::chart::format_bpm;

const TITLE: &str = "Heart Rate";
const CARD_RADIUS: f64 = 12.0;
const TITLE_Y: f64 = 24.0;
const TAB_Y: f64 = 40.0;
const TAB_WIDTH: f64 = 64.0;
const TAB_HEIGHT: f64 = 24.0;
const TAB_GAP: f64 = 8.0;
const DATE_TAG_Y: f64 = 80.0;
const X_LABEL_GAP: f64 = 14.0;
const VALUE_BOX_BOTTOM_GAP: f64 = 24.0;
const TOOLTIP_WIDTH: f64 = 92.0;
const TOOLTIP_HEIGHT: f64 = 40.0;
const TOOLTIP_RADIUS: f64 = 6.0;
const VALUE_TICK_MIN_SPACING_PX: f64 = 20.0;
const VALUE_TICK_MIN_COUNT: usize = 2;
const VALUE_TICK_MAX_COUNT: usize = 24;

impl<R: Renderer> HeartRateChart<R> {
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Draws the current frame into a host-owned Cairo context, e.g. a GTK drawing area.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Materializes the frame for the current state without mutating it.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let style = self.config.render_style;
        let viewport = self.config.viewport;
        let mapper = self.axis_mapper()?;
        let mut frame = RenderFrame::new(viewport).with_rect(
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
                style.background_color,
            )
            .with_corner_radius(CARD_RADIUS),
        );

        self.append_header(&mut frame, style);
        append_value_axis(&mut frame, mapper, style);
        self.append_series(&mut frame, mapper, style)?;

        frame.texts.push(TextPrimitive::new(
            self.value_box_text(),
            self.plot.left,
            f64::from(viewport.height) - VALUE_BOX_BOTTOM_GAP,
            style.axis_label_font_size_px + 3.0,
            style.series_line_color,
            TextHAlign::Left,
        ));

        if let Some(point) = self.hover_state().point() {
            frame.tooltip = Some(build_tooltip(point, viewport, style));
        }

        Ok(frame)
    }

    fn append_header(&self, frame: &mut RenderFrame, style: RenderStyle) {
        let left = self.plot.left;
        frame.texts.push(TextPrimitive::new(
            TITLE,
            left,
            TITLE_Y,
            style.title_font_size_px,
            style.axis_label_color,
            TextHAlign::Left,
        ));

        for (slot, range) in RangeKey::ALL.into_iter().enumerate() {
            let x = left + slot as f64 * (TAB_WIDTH + TAB_GAP);
            let active = range == self.range;
            let (fill, text_color) = if active {
                (style.tab_active_color, style.tab_active_text_color)
            } else {
                (style.tab_inactive_color, style.axis_label_color)
            };
            frame.rects.push(
                RectPrimitive::new(x, TAB_Y, TAB_WIDTH, TAB_HEIGHT, fill)
                    .with_corner_radius(TAB_HEIGHT / 2.0),
            );
            frame.texts.push(TextPrimitive::new(
                range.title(),
                x + TAB_WIDTH / 2.0,
                TAB_Y + TAB_HEIGHT / 2.0,
                style.axis_label_font_size_px,
                text_color,
                TextHAlign::Center,
            ));
        }

        let tag = self.date_tag();
        if !tag.is_empty() {
            frame.texts.push(TextPrimitive::new(
                tag,
                left,
                DATE_TAG_Y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Left,
            ));
        }
    }

    fn append_series(
        &self,
        frame: &mut RenderFrame,
        mapper: AxisMapper,
        style: RenderStyle,
    ) -> ChartResult<()> {
        let series = self.active_series();
        let plot = mapper.plot();

        let mut points = Vec::with_capacity(series.len());
        for (index, value) in series.values().iter().enumerate() {
            points.push((mapper.index_to_pixel_x(index)?, mapper.value_to_pixel_y(*value)));
        }

        let stride = series.len().div_ceil(style.max_x_labels).max(1);
        for (index, label) in series.labels().iter().enumerate().step_by(stride) {
            if label.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                label.clone(),
                points[index].0,
                plot.bottom + X_LABEL_GAP,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ));
        }

        for pair in points.windows(2) {
            frame.lines.push(LinePrimitive::new(
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1,
                style.series_line_width,
                style.series_line_color,
            ));
        }

        // Day is drawn as a bare line; the other ranges mark every sample.
        if self.range != RangeKey::Day {
            for (x, y) in points {
                frame
                    .markers
                    .push(RectPrimitive::circle(x, y, style.point_radius, style.series_line_color));
            }
        }
        Ok(())
    }
}

fn append_value_axis(frame: &mut RenderFrame, mapper: AxisMapper, style: RenderStyle) {
    let plot = mapper.plot();
    let max_ticks = value_tick_target_count(plot.height());
    for tick in mapper.bounds().ticks(style.value_tick_step, max_ticks) {
        let y = mapper.value_to_pixel_y(tick);
        frame.lines.push(LinePrimitive::new(
            plot.left,
            y,
            plot.right,
            y,
            style.grid_line_width,
            style.grid_line_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_bpm(tick),
            plot.left - 6.0,
            y,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
    }
}

/// Grid rows that fit the plot height at the minimum label spacing.
fn value_tick_target_count(axis_span_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return VALUE_TICK_MIN_COUNT;
    }
    let raw = (axis_span_px / VALUE_TICK_MIN_SPACING_PX).floor() as usize + 1;
    raw.clamp(VALUE_TICK_MIN_COUNT, VALUE_TICK_MAX_COUNT)
}

/// Tooltip body sits above the anchor by `tooltip_offset_px`, kept inside the viewport.
fn build_tooltip(point: &HoverPoint, viewport: Viewport, style: RenderStyle) -> TooltipOverlay {
    let max_left = (f64::from(viewport.width) - TOOLTIP_WIDTH).max(0.0);
    let max_top = (f64::from(viewport.height) - TOOLTIP_HEIGHT).max(0.0);
    let left = (point.x - TOOLTIP_WIDTH / 2.0).clamp(0.0, max_left);
    let top = (point.y - style.tooltip_offset_px - TOOLTIP_HEIGHT).clamp(0.0, max_top);
    let center_x = left + TOOLTIP_WIDTH / 2.0;
    let line_height = TOOLTIP_HEIGHT / 2.0;

    TooltipOverlay {
        anchor_x: point.x,
        anchor_y: point.y,
        marker: RectPrimitive::circle(
            point.x,
            point.y,
            style.point_radius + 1.0,
            style.series_line_color,
        )
        .with_border(2.0, style.background_color),
        body: RectPrimitive::new(
            left,
            top,
            TOOLTIP_WIDTH,
            TOOLTIP_HEIGHT,
            style.tooltip_background_color,
        )
        .with_corner_radius(TOOLTIP_RADIUS),
        texts: vec![
            TextPrimitive::new(
                format!("{} bpm", format_bpm(point.value)),
                center_x,
                top + line_height / 2.0 + 2.0,
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Center,
            ),
            TextPrimitive::new(
                point.label.clone(),
                center_x,
                top + line_height * 1.5 - 2.0,
                (style.tooltip_font_size_px - 1.0).max(1.0),
                style.tooltip_text_color,
                TextHAlign::Center,
            ),
        ],
    }
}
