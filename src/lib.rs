//! heart-rate-chart: headless heart-rate line chart with range tabs and a
//! pixel-interpolated hover tooltip.
//!
//! The crate keeps chart state, hover resolution and frame building free of
//! any windowing toolkit. Hosts forward pointer and tab events to
//! [`HeartRateChart`] and hand the resulting frames to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{HeartRateChart, HeartRateChartConfig};
pub use error::{ChartError, ChartResult};
