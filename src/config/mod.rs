//! Configuration handling for the application.
//!
//! Everything is read from environment variables once at startup. Missing
//! variables fall back to development defaults that match running the server
//! from the repository root with a local GLiNER inference server.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use url::Url;

/// Environment variable names.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_DICTIONARY_DIR: &str = "DICTIONARY_DIR";
pub const ENV_MODEL_ENDPOINT: &str = "MODEL_ENDPOINT";
pub const ENV_MODEL_NAME: &str = "MODEL_NAME";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_DICTIONARY_DIR: &str = "data";
const DEFAULT_MODEL_ENDPOINT: &str = "http://127.0.0.1:8000";
const DEFAULT_MODEL_NAME: &str = "urchade/gliner_base";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    dictionary_dir: PathBuf,
    model_endpoint: Url,
    model_name: String,
}

impl Config {
    pub fn new(
        bind_addr: impl Into<String>,
        dictionary_dir: impl Into<PathBuf>,
        model_endpoint: Url,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            dictionary_dir: dictionary_dir.into(),
            model_endpoint,
            model_name: model_name.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// Fails only when `MODEL_ENDPOINT` is not an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let dictionary_dir = env::var(ENV_DICTIONARY_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DICTIONARY_DIR));
        let raw_endpoint =
            env::var(ENV_MODEL_ENDPOINT).unwrap_or_else(|_| DEFAULT_MODEL_ENDPOINT.to_string());
        let model_endpoint = Url::parse(&raw_endpoint).map_err(|e| ConfigError::InvalidValue {
            field: ENV_MODEL_ENDPOINT,
            reason: e.to_string(),
        })?;
        let model_name =
            env::var(ENV_MODEL_NAME).unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string());

        Ok(Self {
            bind_addr,
            dictionary_dir,
            model_endpoint,
            model_name,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Directory holding `furniture_labels`, `blacklist` and `standalone_blacklist`.
    pub fn dictionary_dir(&self) -> &Path {
        &self.dictionary_dir
    }
    /// Base URL of the entity recognition server.
    pub fn model_endpoint(&self) -> &Url {
        &self.model_endpoint
    }
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
