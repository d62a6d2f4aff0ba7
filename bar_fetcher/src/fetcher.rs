//! The never-failing bar retrieval entry point.
//!
//! [`BarFetcher::fetch`] wraps a [`DataProvider`] and turns every failure it
//! reports into an empty `Vec`, logging the cause. Callers that need to tell
//! "no data" apart from "request failed" should call the provider directly.

use tracing::{error, warn};

use crate::{
    config::PolygonConfig,
    models::{bar::Bar, request_params::BarRequest},
    providers::{
        DataProvider, ProviderError, ProviderInitError, polygon_rest::PolygonProvider,
    },
};

pub struct BarFetcher<P = PolygonProvider> {
    provider: P,
}

impl BarFetcher<PolygonProvider> {
    /// Polygon at its default endpoint, key read from `POLYGON_API_KEY` per call.
    pub fn from_env() -> Result<Self, ProviderInitError> {
        PolygonProvider::from_env().map(Self::new)
    }

    pub fn from_config(config: &PolygonConfig) -> Result<Self, ProviderInitError> {
        PolygonProvider::from_config(config).map(Self::new)
    }
}

impl<P: DataProvider> BarFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetches one page of bars for `request`, or nothing on any failure.
    pub async fn fetch(&self, request: &BarRequest) -> Vec<Bar> {
        match self.provider.fetch_bars(request).await {
            Ok(fetched) => {
                if fetched.dropped > 0 {
                    warn!(
                        symbol = %request.symbol,
                        dropped = fetched.dropped,
                        "dropped bars with non-numeric fields"
                    );
                }
                fetched.bars
            }
            Err(ProviderError::MissingCredential { .. }) => {
                warn!(symbol = %request.symbol, "no API key configured, skipping bar fetch");
                Vec::new()
            }
            Err(ProviderError::Api { status, body, .. }) => {
                error!(
                    symbol = %request.symbol,
                    status = status.as_u16(),
                    body = %body,
                    "bar request rejected by provider"
                );
                Vec::new()
            }
            Err(e) => {
                error!(symbol = %request.symbol, "bar fetch failed: {e}");
                Vec::new()
            }
        }
    }
}
