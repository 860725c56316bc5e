use super::error::EmbeddingError;

/// Maps text to fixed-length vectors.
///
/// Implementations must be deterministic for a given instance, and
/// [`embed_batch`](EmbeddingProvider::embed_batch) must return one vector per input, in
/// input order, numerically equal to calling [`embed`](EmbeddingProvider::embed) on each.
/// The batch path exists for throughput only.
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds many texts, preserving order.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Length of every vector this provider produces.
    fn embedding_dim(&self) -> usize;

    /// `true` when the provider produces placeholder vectors instead of model output.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<T: EmbeddingProvider + ?Sized> EmbeddingProvider for std::sync::Arc<T> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed_batch(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}
