//! Rotating list of outbound API keys.

use tracing::{info, warn};

use super::error::ConfigError;

/// Ordered API keys with one active entry.
///
/// Owned by [`Config`](super::Config) and passed to whatever needs it; rotation is an
/// explicit call on the ring, never ambient state.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyRing {
    keys: Vec<String>,
    current: usize,
}

impl std::fmt::Debug for ApiKeyRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyRing")
            .field("keys", &self.keys.len())
            .field("current", &self.current)
            .finish()
    }
}

impl ApiKeyRing {
    /// Env var holding comma-separated keys.
    pub const ENV_VAR: &'static str = "HOTS_API_KEYS";

    /// Parses `"k1, k2,,k3"`: entries are trimmed and blanks dropped.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let keys: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();

        if keys.is_empty() {
            return Err(ConfigError::NoApiKeys {
                name: Self::ENV_VAR,
            });
        }

        Ok(Self { keys, current: 0 })
    }

    /// The active key.
    pub fn current(&self) -> &str {
        &self.keys[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of keys; never zero, since [`parse`](Self::parse) rejects an empty list.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Advances to the next key (wrapping) and returns it.
    ///
    /// With a single key this is a no-op returning that key.
    pub fn rotate(&mut self) -> &str {
        if self.keys.len() <= 1 {
            warn!("Only one API key configured, cannot rotate");
            return self.current();
        }

        self.current = (self.current + 1) % self.keys.len();
        info!(index = self.current, "Switched to next API key");
        self.current()
    }
}
