use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, trace};

use crate::core::HeartRateSample;

/// Retained samples plus how many body rows were dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeartRateTable {
    pub samples: Vec<HeartRateSample>,
    pub skipped_rows: usize,
}

/// Parses a `time_s,heart_rate` table whose first line is a header.
///
/// Rows are dropped individually when the heart rate is not a finite number or
/// is `<= 0`. Rows with a non-numeric time or fewer than two columns are
/// dropped as well, which is stricter than filtering on the heart rate alone:
/// every retained sample has a usable `time_s` for its label. A bad row never
/// aborts the rest of the parse.
#[must_use]
pub fn parse_heart_rate_csv(text: &str) -> HeartRateTable {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut table = HeartRateTable::default();
    for (row, record) in reader.records().enumerate() {
        match record {
            Ok(record) => match parse_row(&record) {
                Some(sample) => table.samples.push(sample),
                None => {
                    trace!(row = row + 2, record = ?record, "skipping heart-rate row");
                    table.skipped_rows += 1;
                }
            },
            Err(err) => {
                trace!(row = row + 2, error = %err, "skipping unreadable heart-rate row");
                table.skipped_rows += 1;
            }
        }
    }

    debug!(
        retained = table.samples.len(),
        skipped = table.skipped_rows,
        "parsed heart-rate table"
    );
    table
}

fn parse_row(record: &StringRecord) -> Option<HeartRateSample> {
    let time_s = parse_finite(record.get(0)?)?;
    let bpm = parse_finite(record.get(1)?)?;
    if bpm <= 0.0 {
        return None;
    }
    Some(HeartRateSample::new(time_s, bpm))
}

fn parse_finite(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|value| value.is_finite())
}
