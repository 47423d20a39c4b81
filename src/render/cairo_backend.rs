use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Renderers that can draw into a host-owned Cairo context.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango renderer drawing into an offscreen ARGB surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::from_rgb_hex(0xF7F7F7),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the last rendered surface as a PNG file.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create {}: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn draw(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for marker in &frame.markers {
            draw_rect(context, *marker)?;
            stats.markers_drawn += 1;
        }

        for text in &frame.texts {
            draw_text(context, text);
            stats.texts_drawn += 1;
        }

        if let Some(tooltip) = &frame.tooltip {
            draw_rect(context, tooltip.marker)?;
            draw_rect(context, tooltip.body)?;
            for text in &tooltip.texts {
                draw_text(context, text);
            }
            stats.tooltip_drawn = true;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| backend_error("failed to create cairo context", err))?;
        self.draw(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.draw(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| backend_error("failed to fill rectangle", err))
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(width) / 2.0,
        TextHAlign::Right => text.x - f64::from(width),
    };

    apply_color(context, text.color);
    // Text y is the vertical centre of the line.
    context.move_to(x, text.y - f64::from(height) / 2.0);
    pangocairo::functions::show_layout(context, &layout);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
