use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid plot area: left={left}, right={right}, top={top}, bottom={bottom}")]
    InvalidPlotArea {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("sample source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("parse error: {0}")]
    Parse(String),
}
