//! LOTS/HOTS question classifier (used by the server and integration tests).
//!
//! Questions are embedded with a sentence encoder and compared against two anchor sets of
//! Bloom's taxonomy keywords. The tier whose keywords are, on average, more similar wins;
//! ties go to LOTS.
//!
//! # Public API Surface
//!
//! ## Classification
//! - [`QuestionClassifier`] - `classify`, `classify_batch`, `classify_detailed`
//! - [`Tier`], [`Classification`], [`ClassificationResult`] - result types
//!
//! ## Building Blocks
//! - [`KeywordSet`] - the two keyword sequences (built-in or JSON file)
//! - [`AnchorStore`], [`AnchorSet`] - precomputed keyword embeddings
//! - [`AnchorMatrix`], [`cosine_similarity`] - similarity scoring
//! - [`EmbeddingProvider`], [`MiniLmEmbedder`], [`MiniLmConfig`] - embedding generation
//!
//! ## Service
//! - [`Config`], [`ConfigError`], [`ApiKeyRing`] - environment configuration
//! - [`gateway`] - Axum router exposing the three classification operations
//!
//! ## Test/Mock Support
//! [`MockEmbedder`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod anchors;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod keywords;
pub mod scoring;

pub use anchors::{AnchorError, AnchorSet, AnchorStore};
pub use classifier::{
    Classification, ClassificationResult, ClassifierError, ClassifierResult, QuestionClassifier,
    Tier,
};
pub use config::{ApiKeyRing, Config, ConfigError};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    EmbeddingError, EmbeddingProvider, MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig,
    MiniLmEmbedder,
};
pub use keywords::{KeywordError, KeywordSet};
pub use scoring::{AnchorMatrix, ScoringError, cosine_similarity};
