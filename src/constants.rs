//! Cross-cutting, shared constants.
//!
//! The embedding defaults match the all-MiniLM-L6-v2 sentence encoder. A loaded model
//! reports its own hidden size, and the anchor store checks every query against it.

/// Output dimension of the default sentence encoder.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the encoder per text; longer inputs are truncated.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Texts per forward pass when embedding a batch.
pub const DEFAULT_INFERENCE_BATCH_SIZE: usize = 32;

/// Score reported for both tiers when the input carries no text.
pub const EMPTY_INPUT_SCORE: f32 = 0.5;

/// Max texts accepted by a single HTTP batch request.
pub const DEFAULT_MAX_BATCH_ITEMS: usize = 1000;

/// Tolerance used when comparing batch and single-item scores.
pub const SCORE_TOLERANCE: f32 = 1e-6;
