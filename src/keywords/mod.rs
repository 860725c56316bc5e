//! Tier keyword source.
//!
//! A [`KeywordSet`] is the pair of ordered phrase lists the anchor store embeds: one for
//! lower-order and one for higher-order questions. Lists come from the built-in Bloom's
//! taxonomy tables or from a JSON file:
//!
//! ```json
//! { "lots": ["define", "list"], "hots": ["evaluate", "design"] }
//! ```

pub mod error;
pub mod taxonomy;


pub use error::KeywordError;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::Tier;

/// Ordered keyword phrases for both tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub lots: Vec<String>,
    pub hots: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordSet {
    pub fn new<L, H>(lots: L, hots: H) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        Self {
            lots: lots.into_iter().map(Into::into).collect(),
            hots: hots.into_iter().map(Into::into).collect(),
        }
    }

    /// The Bloom's taxonomy lists shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(
            taxonomy::LOTS_KEYWORDS.iter().copied(),
            taxonomy::HOTS_KEYWORDS.iter().copied(),
        )
    }

    /// Reads `{ "lots": [...], "hots": [...] }`, trimming every phrase, then validates.
    pub fn from_json_file(path: &Path) -> Result<Self, KeywordError> {
        let content = std::fs::read_to_string(path).map_err(|source| KeywordError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed: KeywordSet =
            serde_json::from_str(&content).map_err(|source| KeywordError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let set = Self::new(
            parsed.lots.iter().map(|k| k.trim()),
            parsed.hots.iter().map(|k| k.trim()),
        );
        set.validate()?;

        debug!(
            path = %path.display(),
            lots = set.lots.len(),
            hots = set.hots.len(),
            "Loaded keyword file"
        );

        Ok(set)
    }

    /// Keywords for one tier.
    pub fn for_tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Lots => &self.lots,
            Tier::Hots => &self.hots,
        }
    }

    /// Both tiers must be non-empty and contain no blank phrase.
    pub fn validate(&self) -> Result<(), KeywordError> {
        for tier in Tier::ALL {
            let keywords = self.for_tier(tier);
            if keywords.is_empty() {
                return Err(KeywordError::EmptyTier { tier });
            }
            if let Some(index) = keywords.iter().position(|k| k.trim().is_empty()) {
                return Err(KeywordError::BlankKeyword { tier, index });
            }
        }
        Ok(())
    }
}
