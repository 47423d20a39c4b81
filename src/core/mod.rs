pub mod axis;
pub mod range;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::AxisMapper;
pub use range::{HoverMode, RangeKey};
pub use scale::{
    DEFAULT_TEST_PADDING, FIXED_BOUNDS_MAX, FIXED_BOUNDS_MIN, LinearScale, ScaleBounds,
};
pub use series::{HeartRateSample, Series};
pub use types::{PlotArea, PlotInsets, Viewport};
