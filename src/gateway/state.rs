use std::sync::Arc;

use crate::classifier::QuestionClassifier;
use crate::embedding::EmbeddingProvider;

pub struct HandlerState<E: EmbeddingProvider + 'static> {
    pub classifier: Arc<QuestionClassifier<E>>,

    /// Max texts accepted by the batch endpoint.
    pub max_batch: usize,
}

impl<E: EmbeddingProvider + 'static> Clone for HandlerState<E> {
    fn clone(&self) -> Self {
        Self {
            classifier: Arc::clone(&self.classifier),
            max_batch: self.max_batch,
        }
    }
}

impl<E: EmbeddingProvider + 'static> HandlerState<E> {
    pub fn new(classifier: Arc<QuestionClassifier<E>>, max_batch: usize) -> Self {
        Self {
            classifier,
            max_batch,
        }
    }
}
