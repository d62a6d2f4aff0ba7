//! TOML-backed settings for the Polygon provider.
//!
//! ```toml
//! [polygon]
//! base_url = "https://api.polygon.io"
//! api_key_env = "POLYGON_API_KEY"
//! ```
//!
//! Every field is optional; a missing file section yields the defaults.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::error;

use crate::errors::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_API_KEY_ENV: &str = "POLYGON_API_KEY";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolygonConfig {
    /// Scheme and host (optionally a path prefix) the `/v2/aggs/...` path is appended to.
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub polygon: PolygonConfig,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let config: Config = toml::from_str(content)?;
        if config.polygon.base_url.trim().is_empty() {
            return Err(Error::Config("polygon.base_url must not be empty".into()));
        }
        if config.polygon.api_key_env.trim().is_empty() {
            return Err(Error::Config("polygon.api_key_env must not be empty".into()));
        }
        Ok(config)
    }
}

/// Reads and validates a configuration file.
pub fn read_config(config_path: impl AsRef<Path>) -> Result<Config, Error> {
    let config_path = config_path.as_ref();
    let content = fs::read_to_string(config_path).inspect_err(|e| {
        error!(path = %config_path.display(), "Failed to read config file: {e}");
    })?;

    Config::from_toml_str(&content).inspect_err(|e| {
        error!(path = %config_path.display(), "Failed to parse config file: {e}");
    })
}
