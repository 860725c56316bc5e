//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `HOTS_*` environment variables.

pub mod error;
pub mod keys;


pub use error::ConfigError;
pub use keys::ApiKeyRing;

use std::env;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_MAX_BATCH_ITEMS;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `HOTS_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Sentence encoder directory (config.json, model.safetensors, tokenizer.json).
    /// Unset runs the embedder in stub mode.
    pub model_path: Option<PathBuf>,

    /// JSON keyword file. Unset uses the built-in Bloom's taxonomy lists.
    pub keywords_path: Option<PathBuf>,

    /// Max texts per batch request. Default: `1000`.
    pub max_batch: usize,

    /// Outbound API keys, if configured.
    pub api_keys: Option<ApiKeyRing>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            keywords_path: None,
            max_batch: DEFAULT_MAX_BATCH_ITEMS,
            api_keys: None,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "HOTS_PORT";
    const ENV_BIND_ADDR: &'static str = "HOTS_BIND_ADDR";
    const ENV_MODEL_PATH: &'static str = "HOTS_MODEL_PATH";
    const ENV_KEYWORDS_PATH: &'static str = "HOTS_KEYWORDS_PATH";
    const ENV_MAX_BATCH: &'static str = "HOTS_MAX_BATCH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let keywords_path = Self::parse_optional_path_from_env(Self::ENV_KEYWORDS_PATH);
        let max_batch = Self::parse_max_batch_from_env(defaults.max_batch)?;
        let api_keys = match env::var(ApiKeyRing::ENV_VAR) {
            Ok(raw) => Some(ApiKeyRing::parse(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            port,
            bind_addr,
            model_path,
            keywords_path,
            max_batch,
            api_keys,
        })
    }

    /// Validates paths (does not open or parse them).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            Self::require(path, Path::is_dir, || ConfigError::NotADirectory {
                path: path.clone(),
            })?;
        }

        if let Some(ref path) = self.keywords_path {
            Self::require(path, Path::is_file, || ConfigError::NotAFile {
                path: path.clone(),
            })?;
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    fn require(
        path: &Path,
        kind_ok: fn(&Path) -> bool,
        wrong_kind: impl FnOnce() -> ConfigError,
    ) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !kind_ok(path) {
            return Err(wrong_kind());
        }
        Ok(())
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_max_batch_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MAX_BATCH) {
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ConfigError::InvalidMaxBatch { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
