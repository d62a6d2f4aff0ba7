//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, the seam between the
//! never-failing [`BarFetcher`](crate::fetcher::BarFetcher) facade and a concrete
//! vendor implementation such as [`PolygonProvider`](polygon_rest::PolygonProvider).
//!
//! Providers report every failure cause through [`ProviderError`]; turning those
//! into an empty result is the fetcher's job, not theirs.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use bar_fetcher::models::{interval::resolve_interval, request_params::BarRequest};
//! use bar_fetcher::providers::{DataProvider, FetchedBars, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     async fn fetch_bars(&self, request: &BarRequest) -> Result<FetchedBars, ProviderError> {
//!         Ok(FetchedBars {
//!             bars: vec![],
//!             interval: resolve_interval(&request.interval),
//!             dropped: 0,
//!         })
//!     }
//! }
//! ```

pub mod polygon_rest;

use async_trait::async_trait;
use reqwest::StatusCode;
use snafu::{Backtrace, Snafu};

use crate::models::{bar::Bar, interval::IntervalResolution, request_params::BarRequest};

/// Trait for fetching historical bars from a market data provider.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches one page of bars for `request`.
    ///
    /// # Returns
    ///
    /// * `Ok(FetchedBars)` - The normalized bars, possibly empty when the
    ///   provider answered without a usable `results` collection.
    /// * `Err(ProviderError)` - Why nothing could be fetched.
    async fn fetch_bars(&self, request: &BarRequest) -> Result<FetchedBars, ProviderError>;
}

#[async_trait]
impl<T: DataProvider + ?Sized> DataProvider for Box<T> {
    async fn fetch_bars(&self, request: &BarRequest) -> Result<FetchedBars, ProviderError> {
        (**self).fetch_bars(request).await
    }
}

/// A successful fetch, together with how the request was interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedBars {
    /// Normalized bars in provider order.
    pub bars: Vec<Bar>,
    /// Whether the requested interval was used or replaced by the default.
    pub interval: IntervalResolution,
    /// Provider records discarded because a field was not a finite number.
    pub dropped: usize,
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// The configured base URL does not parse.
    #[snafu(display("Invalid base URL {url:?}: {source}"))]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
        backtrace: Backtrace,
    },

    /// The configured base URL cannot have path segments appended (e.g. `mailto:`).
    #[snafu(display("Base URL {url:?} cannot carry a request path"))]
    UnsupportedBaseUrl { url: String, backtrace: Backtrace },

    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// No API key is available; no request was sent.
    #[snafu(display("No API key configured"))]
    MissingCredential { backtrace: Backtrace },

    /// The request has no symbol.
    #[snafu(display("Request symbol is empty"))]
    EmptySymbol { backtrace: Backtrace },

    /// A range boundary is not a recognizable date or timestamp.
    #[snafu(display("Invalid `{field}` boundary: {value:?}"))]
    InvalidBoundary {
        field: &'static str,
        value: String,
        backtrace: Backtrace,
    },

    /// API key contains characters that cannot go into a header.
    #[snafu(display("Invalid API key format: {source}"))]
    InvalidApiKey {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },

    /// An error during the API request (e.g., connection failure, body read).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider answered with a non-success status.
    #[snafu(display("API error {status}: {body}"))]
    Api {
        status: StatusCode,
        body: String,
        backtrace: Backtrace,
    },

    /// A success response whose body could not be read as JSON.
    #[snafu(display("Failed to decode response body: {source}"))]
    Decode {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// An internal error occurred while building the request.
    #[snafu(display("Internal provider error: {message}"))]
    Internal {
        message: String,
        backtrace: Backtrace,
    },
}
