use thiserror::Error;

use crate::providers::ProviderInitError;

/// The unified error type for the `bar_fetcher` crate's plumbing.
///
/// [`BarFetcher::fetch`](crate::fetcher::BarFetcher::fetch) never returns this;
/// it covers configuration loading and provider construction.
#[derive(Debug, Error)]
pub enum Error {
    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration file is not valid TOML or has unexpected fields.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The provider could not be constructed.
    #[error("Provider initialization failed: {0}")]
    ProviderInit(#[from] ProviderInitError),
}
