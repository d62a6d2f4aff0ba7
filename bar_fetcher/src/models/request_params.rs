use serde::{Deserialize, Serialize};

/// Parameters for a single historical bars request.
///
/// The boundaries stay string-encoded until the provider normalizes them, and
/// `interval` is kept as the caller's raw code: unknown codes are not rejected
/// here but resolved to the default interval at fetch time (see
/// [`resolve_interval`](crate::models::interval::resolve_interval)).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarRequest {
    /// Ticker to request (e.g. `"AAPL"`, `"X:BTCUSD"`).
    pub symbol: String,

    /// Start of the requested range (inclusive), e.g. `"2024-01-01"` or an RFC 3339 timestamp.
    pub from: String,

    /// End of the requested range (inclusive).
    pub to: String,

    /// Interval code such as `"1m"` or `"1h"`.
    pub interval: String,
}

impl BarRequest {
    pub fn new(
        symbol: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        interval: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            from: from.into(),
            to: to.into(),
            interval: interval.into(),
        }
    }
}
