use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart bounds: top={top}, start={start}, end={end}, bottom={bottom}")]
    InvalidBounds {
        top: f64,
        start: f64,
        end: f64,
        bottom: f64,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate {axis} range: min={min}, max={max}")]
    DegenerateRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
