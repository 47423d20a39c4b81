mod chart;
mod config;
mod interaction_controller;
mod navigation_controller;
mod render_frame_builder;
mod render_style;
mod snapshot;
mod test_data_controller;

pub use chart::HeartRateChart;
pub use config::HeartRateChartConfig;
pub use render_style::RenderStyle;
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};
pub use test_data_controller::{LoadTicket, TestLoadState};
