use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fixed vertical bounds shared by the Day, Week and Month ranges.
pub const FIXED_BOUNDS_MIN: f64 = 80.0;
pub const FIXED_BOUNDS_MAX: f64 = 160.0;
/// Padding applied around the Test series min/max.
pub const DEFAULT_TEST_PADDING: f64 = 10.0;

/// Affine map from a numeric domain onto a pixel interval.
///
/// The pixel interval may be reversed (`pixel_start > pixel_end`), which is how
/// the value axis puts its minimum at the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Vertical axis bounds in bpm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self::fixed()
    }
}

impl ScaleBounds {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// The fixed 80..160 bounds.
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            min: FIXED_BOUNDS_MIN,
            max: FIXED_BOUNDS_MAX,
        }
    }

    /// Data-derived bounds: `[max(floor(min - padding), 0), ceil(max + padding)]`.
    ///
    /// Returns `None` for empty input so callers can fall back to fixed bounds.
    #[must_use]
    pub fn padded(values: &[f64], padding: f64) -> Option<Self> {
        let first = *values.first()?;
        let (lo, hi) = values
            .iter()
            .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        let min = (lo - padding).floor().max(0.0);
        let mut max = (hi + padding).ceil();
        if max <= min {
            // Past 2^53 adding 1.0 is lost to rounding.
            max = min + (min.abs() * f64::EPSILON * 4.0).max(1.0).ceil();
        }
        Some(Self { min, max })
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ChartError::InvalidData(format!(
                "scale bounds must be finite with min < max (min={}, max={})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Tick values from `min` to `max` inclusive, at most `max_ticks` of them.
    ///
    /// `step` is the preferred spacing. It is widened by an integer factor when
    /// the bounds would need more than `max_ticks` ticks.
    #[must_use]
    pub fn ticks(self, step: f64, max_ticks: usize) -> Vec<f64> {
        if !step.is_finite() || step <= 0.0 || max_ticks == 0 || self.validate().is_err() {
            return Vec::new();
        }
        let intervals = self.span() / step;
        let max_intervals = max_ticks.saturating_sub(1).max(1) as f64;
        let step = if intervals > max_intervals {
            step * (intervals / max_intervals).ceil()
        } else {
            step
        };

        let first = (self.min / step).ceil() * step;
        let remaining = self.max - first;
        if !first.is_finite() || !remaining.is_finite() || remaining < -f64::EPSILON {
            return Vec::new();
        }
        let count = ((remaining.max(0.0) / step + 1e-9).floor() as usize + 1).min(max_ticks);
        (0..count).map(|index| first + index as f64 * step).collect()
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}
