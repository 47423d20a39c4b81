use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Floating tooltip drawn above every other primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOverlay {
    /// Anchor the tooltip points at (the hovered value on the chart).
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub marker: RectPrimitive,
    pub body: RectPrimitive,
    pub texts: Vec<TextPrimitive>,
}

impl TooltipOverlay {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.anchor_x.is_finite() || !self.anchor_y.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip anchor must be finite".to_owned(),
            ));
        }
        self.marker.validate()?;
        self.body.validate()?;
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are drawn in field order: rects, lines, markers, texts, then the
/// tooltip. Markers sit on top of the series line they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub markers: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub tooltip: Option<TooltipOverlay>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
            lines: Vec::new(),
            markers: Vec::new(),
            texts: Vec::new(),
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in self.rects.iter().chain(&self.markers) {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.markers.is_empty()
            && self.texts.is_empty()
            && self.tooltip.is_none()
    }
}
