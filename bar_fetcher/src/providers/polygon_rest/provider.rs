use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderValue},
};
use secrecy::ExposeSecret;
use snafu::{OptionExt, ResultExt, ensure};
use tracing::debug;
use url::Url;

use crate::{
    config::PolygonConfig,
    credentials::{CredentialSource, EnvCredentials},
    models::{
        interval::{IntervalResolution, resolve_interval},
        request_params::BarRequest,
    },
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, DecodeSnafu, EmptySymbolSnafu, FetchedBars,
        InvalidApiKeySnafu, InvalidBaseUrlSnafu, MissingCredentialSnafu, ProviderError,
        ProviderInitError, ReqwestSnafu, UnsupportedBaseUrlSnafu,
        polygon_rest::{
            params::{AggregatesQuery, aggregates_url, normalize_boundary},
            response::normalize_results,
        },
    },
};

pub struct PolygonProvider {
    client: Client,
    base_url: Url,
    credentials: Box<dyn CredentialSource>,
}

impl PolygonProvider {
    /// Creates a provider against `config.base_url`, taking the API key from `credentials`.
    pub fn new(
        config: &PolygonConfig,
        credentials: impl CredentialSource + 'static,
    ) -> Result<Self, ProviderInitError> {
        let base_url = Url::parse(config.base_url.trim()).context(InvalidBaseUrlSnafu {
            url: config.base_url.as_str(),
        })?;
        ensure!(
            !base_url.cannot_be_a_base(),
            UnsupportedBaseUrlSnafu {
                url: config.base_url.as_str()
            }
        );

        let client = Client::builder().build().context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url,
            credentials: Box::new(credentials),
        })
    }

    /// Creates a provider that reads the key from the environment variable named
    /// by `config.api_key_env` on every request.
    pub fn from_config(config: &PolygonConfig) -> Result<Self, ProviderInitError> {
        Self::new(config, EnvCredentials::new(config.api_key_env.as_str()))
    }

    /// Default endpoint, key from `POLYGON_API_KEY`.
    pub fn from_env() -> Result<Self, ProviderInitError> {
        Self::from_config(&PolygonConfig::default())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl DataProvider for PolygonProvider {
    async fn fetch_bars(&self, request: &BarRequest) -> Result<FetchedBars, ProviderError> {
        let api_key = self.credentials.api_key().context(MissingCredentialSnafu)?;

        let interval = resolve_interval(&request.interval);
        if let IntervalResolution::Substituted {
            requested,
            fallback,
        } = &interval
        {
            debug!(requested = %requested, fallback = %fallback, "unsupported interval code, using fallback");
        }

        ensure!(!request.symbol.trim().is_empty(), EmptySymbolSnafu);
        let from = normalize_boundary("from", &request.from)?;
        let to = normalize_boundary("to", &request.to)?;
        let url = aggregates_url(&self.base_url, &request.symbol, interval.spec(), &from, &to)?;

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
                .context(InvalidApiKeySnafu)?;
        authorization.set_sensitive(true);

        debug!(symbol = %request.symbol, interval = %interval.code(), %from, %to, "requesting aggregates");
        let response = self
            .client
            .get(url)
            .query(&AggregatesQuery::default())
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .context(ReqwestSnafu)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu { status, body }.fail();
        }

        let payload = response
            .json::<serde_json::Value>()
            .await
            .context(DecodeSnafu)?;
        let (bars, dropped) = normalize_results(&payload);

        Ok(FetchedBars {
            bars,
            interval,
            dropped,
        })
    }
}
