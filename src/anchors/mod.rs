//! Anchor store: precomputed keyword embeddings for both tiers.
//!
//! Built once, before any classification, from a [`KeywordSet`] and an
//! [`EmbeddingProvider`]. The store exposes no mutation; rebuilding means constructing a
//! new classifier. Share it by reference or `Arc` across threads freely.

pub mod error;


pub use error::AnchorError;

use tracing::{debug, info};

use crate::classifier::Tier;
use crate::embedding::EmbeddingProvider;
use crate::keywords::KeywordSet;
use crate::scoring::{AnchorMatrix, ScoringError};

/// One tier's keywords and the parallel matrix of their embeddings.
///
/// Row `i` of the matrix is the embedding of keyword `i`.
#[derive(Debug, Clone)]
pub struct AnchorSet {
    tier: Tier,
    keywords: Vec<String>,
    matrix: AnchorMatrix,
}

impl AnchorSet {
    fn build<E>(tier: Tier, keywords: &[String], embedder: &E) -> Result<Self, AnchorError>
    where
        E: EmbeddingProvider + ?Sized,
    {
        let texts: Vec<&str> = keywords.iter().map(String::as_str).collect();
        let rows = embedder
            .embed_batch(&texts)
            .map_err(|source| AnchorError::Embedding { tier, source })?;

        if rows.len() != keywords.len() {
            return Err(AnchorError::RowCountMismatch {
                tier,
                keywords: keywords.len(),
                rows: rows.len(),
            });
        }

        let expected = embedder.embedding_dim();
        if let Some(row) = rows.iter().find(|row| row.len() != expected) {
            return Err(AnchorError::DimensionMismatch {
                tier,
                expected,
                actual: row.len(),
            });
        }

        let matrix =
            AnchorMatrix::from_rows(rows).map_err(|source| AnchorError::Matrix { tier, source })?;

        debug!(%tier, rows = matrix.rows(), dim = matrix.dim(), "Anchor set embedded");

        Ok(Self {
            tier,
            keywords: keywords.to_vec(),
            matrix,
        })
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matrix(&self) -> &AnchorMatrix {
        &self.matrix
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Mean cosine similarity of `query` against this tier's anchors.
    pub fn score(&self, query: &[f32]) -> Result<f32, ScoringError> {
        self.matrix.mean_similarity(query)
    }

    /// One score per query, in query order.
    pub fn score_batch(&self, queries: &[Vec<f32>]) -> Result<Vec<f32>, ScoringError> {
        self.matrix.mean_similarities(queries)
    }
}

/// Both anchor sets, embedded with the same provider.
#[derive(Debug, Clone)]
pub struct AnchorStore {
    lots: AnchorSet,
    hots: AnchorSet,
}

impl AnchorStore {
    /// Validates the keywords and embeds both tiers.
    pub fn build<E>(keywords: &KeywordSet, embedder: &E) -> Result<Self, AnchorError>
    where
        E: EmbeddingProvider + ?Sized,
    {
        keywords.validate()?;

        let lots = AnchorSet::build(Tier::Lots, &keywords.lots, embedder)?;
        let hots = AnchorSet::build(Tier::Hots, &keywords.hots, embedder)?;

        info!(
            lots_anchors = lots.len(),
            hots_anchors = hots.len(),
            embedding_dim = lots.matrix.dim(),
            stub = embedder.is_stub(),
            "Anchor store built"
        );

        Ok(Self { lots, hots })
    }

    pub fn lots(&self) -> &AnchorSet {
        &self.lots
    }

    pub fn hots(&self) -> &AnchorSet {
        &self.hots
    }

    pub fn get(&self, tier: Tier) -> &AnchorSet {
        match tier {
            Tier::Lots => &self.lots,
            Tier::Hots => &self.hots,
        }
    }

    /// Dimension every query embedding must have.
    pub fn embedding_dim(&self) -> usize {
        self.lots.matrix.dim()
    }
}
