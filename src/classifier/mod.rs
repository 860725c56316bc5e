//! Question classification engine.
//!
//! [`QuestionClassifier`] turns text into an embedding, scores it against both anchor sets
//! and applies the decision policy:
//!
//! - HOTS only when `hots_score > lots_score`; exact ties resolve to LOTS.
//! - Empty or whitespace-only text is never embedded and yields LOTS with both scores at
//!   0.5 and a difference of 0.0.
//! - Provider and scoring failures fail the call; nothing is retried or skipped.

pub mod engine;
pub mod error;
pub mod types;


pub use engine::QuestionClassifier;
pub use error::{ClassifierError, ClassifierResult};
pub use types::{Classification, ClassificationResult, Tier};
