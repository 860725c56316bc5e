//! Embedding provider + model utilities.
//!
//! - [`provider`] defines the text-to-vector capability the classifier consumes.
//! - [`minilm`] is the sentence-transformer implementation (or its lexical stub).

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// MiniLM sentence embedder.
pub mod minilm;
#[cfg(any(test, feature = "mock"))]
mod mock;
/// Embedding provider trait.
pub mod provider;
/// Tokenizer loading helpers.
pub mod utils;

pub use device::Backend;
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use provider::EmbeddingProvider;

pub use minilm::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEmbedder};
