use tracing::{debug, instrument};

use crate::anchors::AnchorStore;
use crate::embedding::{EmbeddingError, EmbeddingProvider};
use crate::keywords::KeywordSet;

use super::error::ClassifierResult;
use super::types::{Classification, ClassificationResult, is_blank};

/// LOTS/HOTS classifier over an embedding provider and a prebuilt anchor store.
///
/// Construction embeds every keyword once; afterwards each call is stateless and the
/// classifier can be shared across threads (wrap it in an `Arc`).
pub struct QuestionClassifier<E: EmbeddingProvider> {
    embedder: E,
    anchors: AnchorStore,
}

impl<E: EmbeddingProvider + std::fmt::Debug> std::fmt::Debug for QuestionClassifier<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionClassifier")
            .field("embedder", &self.embedder)
            .field("lots_anchors", &self.anchors.lots().len())
            .field("hots_anchors", &self.anchors.hots().len())
            .finish_non_exhaustive()
    }
}

impl<E: EmbeddingProvider> QuestionClassifier<E> {
    /// Builds the anchor store. Fails on an empty keyword source or provider error.
    pub fn new(embedder: E, keywords: &KeywordSet) -> ClassifierResult<Self> {
        let anchors = AnchorStore::build(keywords, &embedder)?;
        Ok(Self { embedder, anchors })
    }

    pub fn anchors(&self) -> &AnchorStore {
        &self.anchors
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn is_embedder_stub(&self) -> bool {
        self.embedder.is_stub()
    }

    /// Winning tier and its score.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn classify(&self, text: &str) -> ClassifierResult<Classification> {
        Ok(self.classify_detailed(text)?.into())
    }

    /// Both tier scores, their difference and the decision.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn classify_detailed(&self, text: &str) -> ClassifierResult<ClassificationResult> {
        if is_blank(text) {
            debug!("Blank input, returning default result");
            return Ok(ClassificationResult::empty_input());
        }

        let embedding = self.embedder.embed(text)?;
        let lots_score = self.anchors.lots().score(&embedding)?;
        let hots_score = self.anchors.hots().score(&embedding)?;
        let result = ClassificationResult::from_scores(lots_score, hots_score);

        debug!(
            tier = %result.tier,
            lots_score = result.lots_score,
            hots_score = result.hots_score,
            "Question classified"
        );

        Ok(result)
    }

    /// Classifies many texts with one provider call; output order matches input order.
    #[instrument(skip(self, texts), fields(batch_len = texts.len()))]
    pub fn classify_batch(&self, texts: &[&str]) -> ClassifierResult<Vec<Classification>> {
        Ok(self
            .classify_batch_detailed(texts)?
            .into_iter()
            .map(Classification::from)
            .collect())
    }

    /// Batch form of [`classify_detailed`](Self::classify_detailed).
    ///
    /// Blank items take the default result without being embedded. Any provider or
    /// scoring failure fails the whole call.
    pub fn classify_batch_detailed(
        &self,
        texts: &[&str],
    ) -> ClassifierResult<Vec<ClassificationResult>> {
        let mut results = vec![ClassificationResult::empty_input(); texts.len()];

        let (indices, pending): (Vec<usize>, Vec<&str>) = texts
            .iter()
            .enumerate()
            .filter(|(_, text)| !is_blank(text))
            .map(|(index, text)| (index, *text))
            .unzip();

        if pending.is_empty() {
            debug!(batch_len = texts.len(), "No embeddable items in batch");
            return Ok(results);
        }

        let embeddings = self.embedder.embed_batch(&pending)?;
        if embeddings.len() != pending.len() {
            return Err(EmbeddingError::BatchSizeMismatch {
                expected: pending.len(),
                actual: embeddings.len(),
            }
            .into());
        }

        let lots_scores = self.anchors.lots().score_batch(&embeddings)?;
        let hots_scores = self.anchors.hots().score_batch(&embeddings)?;

        for ((index, lots_score), hots_score) in indices.into_iter().zip(lots_scores).zip(hots_scores)
        {
            results[index] = ClassificationResult::from_scores(lots_score, hots_score);
        }

        debug!(
            batch_len = texts.len(),
            embedded = pending.len(),
            hots = results.iter().filter(|r| r.is_hots()).count(),
            "Batch classified"
        );

        Ok(results)
    }
}
