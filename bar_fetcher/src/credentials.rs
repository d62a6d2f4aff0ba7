//! Where the provider API key comes from.
//!
//! The key is looked up on every fetch rather than once at construction, so a
//! rotated or late-injected secret is picked up without rebuilding the fetcher.

use secrecy::{ExposeSecret, SecretString};
use shared_utils::env::get_optional_env_var;

use crate::config::DEFAULT_API_KEY_ENV;

pub trait CredentialSource: Send + Sync {
    /// Returns the API key, or `None` when none is configured.
    fn api_key(&self) -> Option<SecretString>;
}

/// Reads the key from a named environment variable on each call.
///
/// Unset, empty and whitespace-only values all count as missing.
#[derive(Clone, Debug)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<SecretString> {
        get_optional_env_var(&self.var).map(SecretString::from)
    }
}

/// A fixed key, or a fixed absence of one.
#[derive(Debug, Default)]
pub struct StaticCredentials(Option<SecretString>);

impl StaticCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        if api_key.trim().is_empty() {
            return Self(None);
        }
        Self(Some(SecretString::from(api_key)))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Option<SecretString> {
        self.0
            .as_ref()
            .map(|key| SecretString::from(key.expose_secret().to_owned()))
    }
}
