use thiserror::Error;

use crate::anchors::AnchorError;
use crate::embedding::EmbeddingError;
use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The anchor store could not be built (startup only).
    #[error("anchor store unavailable: {0}")]
    Anchors(#[from] AnchorError),

    /// The embedding provider failed for this call.
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// A query embedding could not be scored against the anchors.
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

pub type ClassifierResult<T> = Result<T, ClassifierError>;
