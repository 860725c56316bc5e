//! Shared fixtures for integration tests.

#![allow(dead_code)]

use hots::{EmbeddingError, EmbeddingProvider, KeywordSet};

/// LOTS and HOTS phrases used by the documented classification scenario.
pub fn scenario_keywords() -> KeywordSet {
    KeywordSet::new(
        ["define", "list", "what is"],
        ["evaluate", "design", "compare and contrast"],
    )
}

/// Bag-of-words embedder over a fixed vocabulary.
///
/// Each vocabulary word owns one dimension; every other word lands in a shared trailing
/// dimension that no keyword uses. Collision-free, so expected labels are exact.
#[derive(Debug, Clone)]
pub struct VocabEmbedder {
    vocab: Vec<String>,
}

impl VocabEmbedder {
    pub fn new(words: &[&str]) -> Self {
        Self {
            vocab: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Vocabulary covering every word of [`scenario_keywords`].
    pub fn for_scenario() -> Self {
        Self::new(&[
            "define", "list", "what", "is", "evaluate", "design", "compare", "and", "contrast",
        ])
    }

    fn other_index(&self) -> usize {
        self.vocab.len()
    }
}

impl EmbeddingProvider for VocabEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut embedding = vec![0.0; self.embedding_dim()];
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            let index = self
                .vocab
                .iter()
                .position(|word| *word == token)
                .unwrap_or(self.other_index());
            embedding[index] += 1.0;
        }
        Ok(embedding)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn embedding_dim(&self) -> usize {
        self.vocab.len() + 1
    }
}
