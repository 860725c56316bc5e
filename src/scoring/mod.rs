//! Similarity scoring against anchor matrices.
//!
//! A tier score is the arithmetic mean of the cosine similarities between a query embedding
//! and every anchor row of that tier. Averaging over the whole vocabulary keeps one closely
//! matching keyword from deciding the tier on its own; do not swap it for a max or a
//! weighted reduction without re-deriving expected outcomes.
//!
//! The batch path ([`AnchorMatrix::mean_similarities`]) stacks the queries and runs one
//! candle matmul against the unit-length anchor rows; it agrees with the single path within
//! [`SCORE_TOLERANCE`](crate::constants::SCORE_TOLERANCE).

pub mod error;
pub mod similarity;


pub use error::ScoringError;
pub use similarity::{AnchorMatrix, cosine_similarity};
