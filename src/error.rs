use thiserror::Error;

pub type HeatmapResult<T> = Result<T, HeatmapError>;

#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset validation failed: {0}")]
    Validation(String),

    #[error("value outside scale domain: {0}")]
    Domain(String),

    #[error("dataset fetch failed: {0}")]
    Fetch(String),
}
