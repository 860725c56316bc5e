//! Anchor store error types.

use thiserror::Error;

use crate::classifier::Tier;
use crate::embedding::EmbeddingError;
use crate::keywords::KeywordError;
use crate::scoring::ScoringError;

/// Errors that prevent the anchor store from being built.
///
/// Every variant is fatal at startup: without both anchor sets no classification is
/// meaningful.
#[derive(Debug, Error)]
pub enum AnchorError {
    /// The keyword source is empty or malformed.
    #[error("invalid keyword source: {0}")]
    Keywords(#[from] KeywordError),

    /// The embedding provider failed while embedding keywords.
    #[error("failed to embed {tier} keywords: {source}")]
    Embedding {
        tier: Tier,
        #[source]
        source: EmbeddingError,
    },

    /// The provider returned a different number of vectors than keywords.
    #[error("{tier} anchors: {keywords} keywords but {rows} embeddings")]
    RowCountMismatch {
        tier: Tier,
        keywords: usize,
        rows: usize,
    },

    /// Keyword embeddings disagree with the provider's declared dimension.
    #[error("{tier} anchors: provider declares dimension {expected}, produced {actual}")]
    DimensionMismatch {
        tier: Tier,
        expected: usize,
        actual: usize,
    },

    /// The embeddings could not form a matrix.
    #[error("{tier} anchors: {source}")]
    Matrix {
        tier: Tier,
        #[source]
        source: ScoringError,
    },
}
