use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{RangeKey, Series};
use crate::data::{SampleSource, parse_heart_rate_csv};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::HeartRateChart;

/// Lifecycle of the Test dataset load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestLoadState {
    NotStarted,
    Pending { generation: u64 },
    Loaded { retained: usize, skipped: usize },
    Failed { message: String },
}

/// Token for one in-flight Test load.
///
/// Only the ticket from the most recent `begin_test_load` can complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

impl<R: Renderer> HeartRateChart<R> {
    #[must_use]
    pub fn test_series(&self) -> &Series {
        &self.test_series
    }

    #[must_use]
    pub fn test_load_state(&self) -> &TestLoadState {
        &self.test_load
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Marks the Test load as in flight and returns its ticket.
    ///
    /// A later call supersedes earlier tickets.
    pub fn begin_test_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        let generation = self.load_generation;
        self.test_load = TestLoadState::Pending { generation };
        debug!(generation, "test dataset load started");
        LoadTicket { generation }
    }

    /// Applies the outcome of a Test load.
    ///
    /// Returns `false` when the result was discarded because the chart was torn
    /// down or a newer load superseded `ticket`. Fetch failures are logged and
    /// leave the Test series empty.
    pub fn complete_test_load(&mut self, ticket: LoadTicket, result: ChartResult<String>) -> bool {
        if self.torn_down {
            debug!(
                generation = ticket.generation,
                "discarding test dataset after teardown"
            );
            return false;
        }
        match self.test_load {
            TestLoadState::Pending { generation } if generation == ticket.generation => {}
            _ => {
                debug!(
                    generation = ticket.generation,
                    current = self.load_generation,
                    "discarding stale test dataset load"
                );
                return false;
            }
        }

        match result {
            Ok(text) => {
                let table = parse_heart_rate_csv(&text);
                self.test_series = Series::from_samples(&table.samples);
                self.test_load = TestLoadState::Loaded {
                    retained: table.samples.len(),
                    skipped: table.skipped_rows,
                };
                info!(
                    retained = table.samples.len(),
                    skipped = table.skipped_rows,
                    "test dataset loaded"
                );
            }
            Err(err) => {
                warn!(error = %err, "test dataset load failed; showing empty series");
                self.test_series = Series::empty();
                self.test_load = TestLoadState::Failed {
                    message: err.to_string(),
                };
            }
        }

        if self.range == RangeKey::Test {
            self.interaction.clear_hover();
        }
        true
    }

    /// Fetches and applies the Test table synchronously.
    pub fn load_test_series(&mut self, source: &dyn SampleSource) -> bool {
        let ticket = self.begin_test_load();
        debug!(source = %source.describe(), "fetching test dataset");
        let result = source.fetch();
        self.complete_test_load(ticket, result)
    }

    /// Marks the chart as unmounted. Loads completing afterwards are discarded.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.interaction.on_pointer_leave();
        debug!("heart-rate chart torn down");
    }
}
