use crate::core::{LinearScale, PlotArea, ScaleBounds};
use crate::error::{ChartError, ChartResult};

/// Converts between sample index/value space and pixel space.
///
/// X uses even category spacing across `point_count` samples with the first
/// and last sample on the plot edges. Y is linear with `bounds.min` at the
/// bottom edge and `bounds.max` at the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapper {
    plot: PlotArea,
    bounds: ScaleBounds,
    point_count: usize,
    value_scale: LinearScale,
}

impl AxisMapper {
    pub fn new(plot: PlotArea, bounds: ScaleBounds, point_count: usize) -> ChartResult<Self> {
        plot.validate()?;
        bounds.validate()?;
        let value_scale = LinearScale::new(bounds.min, bounds.max, plot.bottom, plot.top)?;
        Ok(Self {
            plot,
            bounds,
            point_count,
            value_scale,
        })
    }

    #[must_use]
    pub fn plot(self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn bounds(self) -> ScaleBounds {
        self.bounds
    }

    #[must_use]
    pub fn point_count(self) -> usize {
        self.point_count
    }

    /// Pixel X of sample `index`. A single sample sits in the middle of the plot.
    pub fn index_to_pixel_x(self, index: usize) -> ChartResult<f64> {
        if index >= self.point_count {
            return Err(ChartError::InvalidData(format!(
                "index {index} out of range for {} points",
                self.point_count
            )));
        }
        if self.point_count == 1 {
            return Ok(self.plot.left + self.plot.width() / 2.0);
        }
        // Interpolating between the edges keeps the first and last samples exactly on them.
        let t = index as f64 / (self.point_count - 1) as f64;
        Ok(self.plot.left * (1.0 - t) + self.plot.right * t)
    }

    #[must_use]
    pub fn value_to_pixel_y(self, value: f64) -> f64 {
        self.value_scale.domain_to_pixel(value)
    }

    #[must_use]
    pub fn pixel_y_to_value(self, pixel_y: f64) -> f64 {
        self.value_scale.pixel_to_domain(pixel_y)
    }

    /// Position of `pixel_x` along the plot width, clamped to `[0, 1]`.
    #[must_use]
    pub fn pixel_x_to_fraction(self, pixel_x: f64) -> f64 {
        ((pixel_x - self.plot.left) / self.plot.width()).clamp(0.0, 1.0)
    }

    /// Continuous position along the segment axis: `fraction * (point_count - 1)`.
    ///
    /// For the 24-sample Day series this is the hour float `hf` in `[0, 23]`;
    /// it targets hour-to-hour segments rather than slot centres.
    #[must_use]
    pub fn pixel_x_to_segment_position(self, pixel_x: f64) -> f64 {
        let segments = self.point_count.saturating_sub(1) as f64;
        self.pixel_x_to_fraction(pixel_x) * segments
    }
}
