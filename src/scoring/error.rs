use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("anchor matrix has no rows")]
    EmptyMatrix,

    #[error("embedding dimension must be greater than zero")]
    ZeroDimension,

    #[error("similarity computation failed: {reason}")]
    ComputeFailed { reason: String },
}

impl From<candle_core::Error> for ScoringError {
    fn from(err: candle_core::Error) -> Self {
        ScoringError::ComputeFailed {
            reason: err.to_string(),
        }
    }
}
