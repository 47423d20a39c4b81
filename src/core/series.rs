use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Index-aligned labels and heart-rate values for one range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    pub const EMPTY: Series = Series {
        labels: Vec::new(),
        values: Vec::new(),
    };

    pub fn new(labels: Vec<String>, values: Vec<f64>) -> ChartResult<Self> {
        if labels.len() != values.len() {
            return Err(ChartError::InvalidData(format!(
                "series labels ({}) and values ({}) must have equal length",
                labels.len(),
                values.len()
            )));
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "series values must be finite".to_owned(),
            ));
        }
        Ok(Self { labels, values })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the Test series from retained CSV samples, labelling each by its time.
    #[must_use]
    pub fn from_samples(samples: &[HeartRateSample]) -> Self {
        let labels = samples.iter().map(|s| format!("{}s", s.time_s)).collect();
        let values = samples.iter().map(|s| s.bpm).collect();
        Self { labels, values }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&str, f64)> {
        let label = self.labels.get(index)?;
        let value = self.values.get(index)?;
        Some((label.as_str(), *value))
    }

    #[must_use]
    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns `(min, max)` of the values, or `None` for an empty series.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
        )
    }
}

/// One retained row of the Test heart-rate table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSample {
    pub time_s: f64,
    pub bpm: f64,
}

impl HeartRateSample {
    #[must_use]
    pub fn new(time_s: f64, bpm: f64) -> Self {
        Self { time_s, bpm }
    }
}
