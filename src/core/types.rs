use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Insets of the plotted rectangle from the viewport edges, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self {
            left: 48.0,
            right: 16.0,
            top: 96.0,
            bottom: 72.0,
        }
    }
}

/// Plotted rectangle `[left, right] x [top, bottom]` in pixel space.
///
/// Pixel Y grows downward, so `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> ChartResult<Self> {
        let area = Self {
            left,
            right,
            top,
            bottom,
        };
        area.validate()?;
        Ok(area)
    }

    /// Derives the plotted rectangle from a viewport and its insets.
    pub fn from_viewport(viewport: Viewport, insets: PlotInsets) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Self::new(
            insets.left,
            f64::from(viewport.width) - insets.right,
            insets.top,
            f64::from(viewport.height) - insets.bottom,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        let finite = self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite();
        if !finite || self.right <= self.left || self.bottom <= self.top {
            return Err(ChartError::InvalidPlotArea {
                left: self.left,
                right: self.right,
                top: self.top,
                bottom: self.bottom,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        x >= self.left && x <= self.right
    }
}
