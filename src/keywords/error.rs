//! Keyword source error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::classifier::Tier;

/// Errors raised while loading or validating tier keywords.
///
/// All of them are configuration errors: the classifier refuses to start on any of them.
#[derive(Debug, Error)]
pub enum KeywordError {
    /// A tier has no keywords at all.
    #[error("no {tier} keywords configured")]
    EmptyTier { tier: Tier },

    /// A keyword is empty or whitespace-only.
    #[error("{tier} keyword at index {index} is blank")]
    BlankKeyword { tier: Tier, index: usize },

    /// The keyword file could not be read.
    #[error("failed to read keyword file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The keyword file is not valid JSON of the expected shape.
    #[error("failed to parse keyword file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
