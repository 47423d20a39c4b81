use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RangeKey, Series};
use crate::error::{ChartError, ChartResult};

pub const DAY_LEN: usize = 24;
pub const WEEK_LEN: usize = 7;
pub const MONTH_LEN: usize = 30;

const MONTH_MIN_BPM: u32 = 95;
const MONTH_MAX_BPM: u32 = 135;

const WEEK_LABELS: [&str; WEEK_LEN] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEK_VALUES: [f64; WEEK_LEN] = [112.0, 115.0, 118.0, 135.0, 122.0, 118.0, 120.0];

#[rustfmt::skip]
const DAY_VALUES: [[f64; DAY_LEN]; 3] = [
    [
        92.0, 90.0, 88.0, 87.0, 86.0, 88.0, 95.0, 104.0, 112.0, 118.0, 121.0, 117.0,
        124.0, 119.0, 115.0, 113.0, 120.0, 131.0, 138.0, 126.0, 114.0, 106.0, 99.0, 95.0,
    ],
    [
        94.0, 91.0, 89.0, 88.0, 88.0, 90.0, 98.0, 108.0, 116.0, 113.0, 110.0, 114.0,
        122.0, 118.0, 112.0, 110.0, 116.0, 142.0, 149.0, 133.0, 118.0, 108.0, 101.0, 96.0,
    ],
    [
        90.0, 89.0, 87.0, 86.0, 85.0, 87.0, 93.0, 101.0, 110.0, 115.0, 119.0, 121.0,
        126.0, 120.0, 116.0, 114.0, 118.0, 125.0, 129.0, 122.0, 113.0, 104.0, 97.0, 93.0,
    ],
];

/// One pre-generated hourly day of samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    pub series: Series,
}

/// Index into the ordered day snapshots, clamped to `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCursor {
    index: usize,
    len: usize,
}

impl DayCursor {
    /// Cursor positioned on the most recent day.
    #[must_use]
    pub fn latest(len: usize) -> Self {
        Self {
            index: len.saturating_sub(1),
            len,
        }
    }

    #[must_use]
    pub fn at(index: usize, len: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
            len,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn has_prev(self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn has_next(self) -> bool {
        self.index + 1 < self.len
    }

    /// Moves one day back. Returns whether the cursor moved.
    pub fn go_prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Moves one day forward. Returns whether the cursor moved.
    pub fn go_next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.index += 1;
        true
    }
}

/// Owns the static Day/Week/Month series.
///
/// Month values are drawn once here and never regenerated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetProvider {
    anchor_date: NaiveDate,
    days: Vec<DaySnapshot>,
    week: Series,
    month: Series,
}

impl DatasetProvider {
    /// Builds the provider, seeding the Month generator when `month_seed` is set.
    pub fn new(anchor_date: NaiveDate, month_seed: Option<u64>) -> ChartResult<Self> {
        let mut rng = match month_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(anchor_date, &mut rng)
    }

    pub fn with_rng<G: Rng>(anchor_date: NaiveDate, rng: &mut G) -> ChartResult<Self> {
        let days = day_snapshots(anchor_date)?;
        let week = Series::new(
            WEEK_LABELS.iter().map(|label| (*label).to_owned()).collect(),
            WEEK_VALUES.to_vec(),
        )?;
        let month = Series::new(
            (1..=MONTH_LEN).map(|day| day.to_string()).collect(),
            (0..MONTH_LEN)
                .map(|_| f64::from(rng.gen_range(MONTH_MIN_BPM..=MONTH_MAX_BPM)))
                .collect(),
        )?;
        debug!(
            days = days.len(),
            anchor = %anchor_date,
            "dataset provider initialized"
        );
        Ok(Self {
            anchor_date,
            days,
            week,
            month,
        })
    }

    #[must_use]
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    #[must_use]
    pub fn day_snapshots(&self) -> &[DaySnapshot] {
        &self.days
    }

    #[must_use]
    pub fn day_cursor(&self) -> DayCursor {
        DayCursor::latest(self.days.len())
    }

    #[must_use]
    pub fn day(&self, cursor: DayCursor) -> Option<&DaySnapshot> {
        self.days.get(cursor.index())
    }

    #[must_use]
    pub fn week(&self) -> &Series {
        &self.week
    }

    #[must_use]
    pub fn month(&self) -> &Series {
        &self.month
    }

    /// Human-readable date span covered by `range`, e.g. `2025/10/17 - 2025/10/23`.
    #[must_use]
    pub fn date_tag(&self, range: RangeKey, cursor: DayCursor) -> String {
        match range {
            RangeKey::Day => self
                .day(cursor)
                .map_or_else(String::new, |snapshot| format_date(snapshot.date)),
            RangeKey::Week => self.span_tag(WEEK_LEN),
            RangeKey::Month => self.span_tag(MONTH_LEN),
            RangeKey::Test => "Test recording".to_owned(),
        }
    }

    fn span_tag(&self, len: usize) -> String {
        let start = self
            .anchor_date
            .checked_sub_days(Days::new(len as u64 - 1))
            .unwrap_or(self.anchor_date);
        format!("{} - {}", format_date(start), format_date(self.anchor_date))
    }
}

/// Selects the series to hover and render for the current state.
///
/// Every hover and render pass goes through this function so no caller keeps a
/// stale copy of the active series.
#[must_use]
pub fn resolve_active_series<'a>(
    provider: &'a DatasetProvider,
    range: RangeKey,
    cursor: DayCursor,
    test: &'a Series,
) -> &'a Series {
    match range {
        RangeKey::Day => provider
            .day(cursor)
            .map_or(empty_series(), |snapshot| &snapshot.series),
        RangeKey::Week => provider.week(),
        RangeKey::Month => provider.month(),
        RangeKey::Test => test,
    }
}

fn empty_series() -> &'static Series {
    static EMPTY: Series = Series::EMPTY;
    &EMPTY
}

fn day_snapshots(anchor_date: NaiveDate) -> ChartResult<Vec<DaySnapshot>> {
    let count = DAY_VALUES.len() as u64;
    DAY_VALUES
        .iter()
        .enumerate()
        .map(|(offset, values)| {
            let back = count - 1 - offset as u64;
            let date = anchor_date.checked_sub_days(Days::new(back)).ok_or_else(|| {
                ChartError::InvalidData(format!("anchor date {anchor_date} is out of range"))
            })?;
            let labels = (0..DAY_LEN).map(|hour| format!("{hour}:00")).collect();
            Ok(DaySnapshot {
                date,
                series: Series::new(labels, values.to_vec())?,
            })
        })
        .collect()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%-m/%-d").to_string()
}
