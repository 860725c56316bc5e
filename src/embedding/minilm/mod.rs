//! MiniLM sentence embedder (BERT safetensors + tokenizer).
//!
//! Use [`MiniLmConfig::stub`] for tests/examples without model files.

/// MiniLM configuration.
pub mod config;
pub(crate) mod model;

#[cfg(test)]
mod tests;

pub use config::{MINILM_BATCH_SIZE, MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig};

use candle_core::{Device, Tensor};
use tokenizers::{Encoding, Tokenizer};
use tracing::{debug, info, warn};

use crate::embedding::device::{Backend, select_device};
use crate::embedding::error::EmbeddingError;
use crate::embedding::provider::EmbeddingProvider;
use crate::embedding::utils::load_batch_tokenizer;

use model::SentenceEncoder;

enum EmbedderBackend {
    Model {
        encoder: SentenceEncoder,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub {
        device: Device,
    },
}

/// Sentence embedder producing unit-length vectors (supports stub mode).
pub struct MiniLmEmbedder {
    backend: EmbedderBackend,
    config: MiniLmConfig,
}

impl std::fmt::Debug for MiniLmEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniLmEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub { device } => format!("Stub({:?})", device),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .field("batch_size", &self.config.batch_size)
            .finish()
    }
}

impl MiniLmEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: MiniLmConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for MiniLM");

        if config.testing_stub {
            warn!("MiniLM running in STUB mode (lexical hashing, testing only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub { device },
                config,
            });
        }

        let (encoder, tokenizer) = Self::load_model(&config, &device)?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            batch_size = config.batch_size,
            num_layers = encoder.num_layers(),
            backend = Backend::of(&device).as_str(),
            "MiniLM model loaded successfully"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Shorthand for `load(MiniLmConfig::stub())`.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(MiniLmConfig::stub())
    }

    fn load_model(
        config: &MiniLmConfig,
        device: &Device,
    ) -> Result<(SentenceEncoder, Tokenizer), EmbeddingError> {
        let tokenizer = load_batch_tokenizer(&config.model_dir, config.max_seq_len).map_err(
            |e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            },
        )?;

        let encoder = SentenceEncoder::load(&config.model_dir, device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        if encoder.hidden_size() != config.embedding_dim {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) does not match model hidden_size ({})",
                    config.embedding_dim,
                    encoder.hidden_size()
                ),
            });
        }

        Ok((encoder, tokenizer))
    }

    fn embed_batch_with_model(
        &self,
        texts: &[&str],
        encoder: &SentenceEncoder,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let mut results = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(self.config.batch_size) {
            let encodings = tokenizer.encode_batch(chunk.to_vec(), true).map_err(|e| {
                EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                }
            })?;

            debug!(
                batch_len = chunk.len(),
                padded_len = encodings.first().map_or(0, |e| e.get_ids().len()),
                "Running MiniLM forward pass"
            );

            let input_ids = stack_rows(&encodings, device, Encoding::get_ids)?;
            let type_ids = stack_rows(&encodings, device, Encoding::get_type_ids)?;
            let attention_mask = stack_rows(&encodings, device, Encoding::get_attention_mask)?;

            let pooled = encoder
                .encode(&input_ids, &type_ids, &attention_mask)
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("Transformer forward pass failed: {}", e),
                })?
                .to_vec2::<f32>()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("Failed to convert embeddings to vec: {}", e),
                })?;

            results.extend(pooled.into_iter().map(normalize));
        }

        if results.len() != texts.len() {
            return Err(EmbeddingError::BatchSizeMismatch {
                expected: texts.len(),
                actual: results.len(),
            });
        }

        Ok(results)
    }

    /// Signed feature hashing over lowercase alphanumeric tokens.
    ///
    /// Texts sharing words get positive cosine similarity, which is enough for the
    /// classifier to behave plausibly without model files.
    fn embed_stub(&self, text: &str) -> Vec<f32> {
        let dim = self.config.embedding_dim;
        let mut embedding = vec![0.0f32; dim];

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let hash = blake3::hash(token.to_lowercase().as_bytes());
            let bytes = hash.as_bytes();

            let mut bucket = [0u8; 8];
            bucket.copy_from_slice(&bytes[..8]);
            let index = (u64::from_le_bytes(bucket) % dim as u64) as usize;
            let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };

            embedding[index] += sign;
        }

        normalize(embedding)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    /// Returns the compute backend in use.
    pub fn backend(&self) -> Backend {
        match &self.backend {
            EmbedderBackend::Model { device, .. } | EmbedderBackend::Stub { device } => {
                Backend::of(device)
            }
        }
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &MiniLmConfig {
        &self.config
    }
}

impl EmbeddingProvider for MiniLmEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self
                .embed_batch_with_model(&[text], encoder, tokenizer, device)?
                .pop()
                .ok_or(EmbeddingError::BatchSizeMismatch {
                    expected: 1,
                    actual: 0,
                }),
            EmbedderBackend::Stub { .. } => {
                debug!(text_len = text.len(), "Generating stub embedding");
                Ok(self.embed_stub(text))
            }
        }
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        match &self.backend {
            EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self.embed_batch_with_model(texts, encoder, tokenizer, device),
            EmbedderBackend::Stub { .. } => {
                debug!(batch_len = texts.len(), "Generating stub embeddings");
                Ok(texts.iter().map(|text| self.embed_stub(text)).collect())
            }
        }
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub { .. })
    }
}

fn stack_rows(
    encodings: &[Encoding],
    device: &Device,
    field: fn(&Encoding) -> &[u32],
) -> Result<Tensor, EmbeddingError> {
    let rows = encodings
        .iter()
        .map(|encoding| Tensor::new(field(encoding), device))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Tensor::stack(&rows, 0)?)
}

pub(crate) fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
