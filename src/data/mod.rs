//! Dataset provider: static Day/Week/Month series and the Test table loader.

mod csv_table;
mod datasets;
mod source;

pub use csv_table::{HeartRateTable, parse_heart_rate_csv};
pub use datasets::{
    DAY_LEN, DatasetProvider, DayCursor, DaySnapshot, MONTH_LEN, WEEK_LEN,
    resolve_active_series,
};
#[cfg(feature = "http-source")]
pub use source::HttpSampleSource;
pub use source::{FileSampleSource, SampleSource, StaticSampleSource};
