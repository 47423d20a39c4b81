use serde::{Deserialize, Serialize};

use crate::core::{RangeKey, ScaleBounds, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::HeartRateChart;
use super::test_data_controller::TestLoadState;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of the chart state for regression tests and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub range: RangeKey,
    pub day_index: usize,
    pub day_count: usize,
    pub series_len: usize,
    pub bounds: ScaleBounds,
    pub date_tag: String,
    pub hover: HoverState,
    pub test_load: TestLoadState,
    pub torn_down: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Parse(format!("snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> HeartRateChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            viewport: self.config.viewport,
            range: self.range,
            day_index: self.day_cursor.index(),
            day_count: self.day_cursor.len(),
            series_len: self.active_series().len(),
            bounds: self.scale_bounds(),
            date_tag: self.date_tag(),
            hover: self.hover_state().clone(),
            test_load: self.test_load.clone(),
            torn_down: self.torn_down,
        }
    }
}
