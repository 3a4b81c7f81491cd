use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(
        "stacked entry {index} in data set `{data_set}` has {actual} values, expected {expected}"
    )]
    StackMismatch {
        data_set: String,
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error("serialization failure: {0}")]
    Serialization(String),
}
