use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;
use snafu::OptionExt;
use url::Url;

use crate::{
    models::interval::IntervalSpec,
    providers::{InternalSnafu, InvalidBoundarySnafu, ProviderError},
};

/// Maximum number of bars requested (and returned) per fetch. Only one page is read.
pub const PAGE_LIMIT: u32 = 5000;

/// Query string sent with every aggregates request.
///
/// Only constructible through [`Default`]: split adjustment, ascending order
/// and the one-page limit are fixed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AggregatesQuery {
    adjusted: bool,
    sort: &'static str,
    limit: u32,
}

impl Default for AggregatesQuery {
    fn default() -> Self {
        Self {
            adjusted: true,
            sort: "asc",
            limit: PAGE_LIMIT,
        }
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a range boundary.
///
/// Accepts RFC 3339 timestamps with an offset, offset-less date-times (read as
/// UTC) and plain `YYYY-MM-DD` dates (UTC midnight).
pub fn parse_boundary(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `2024-01-01T00:00:00.000Z`
pub fn to_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn normalize_boundary(field: &'static str, raw: &str) -> Result<String, ProviderError> {
    parse_boundary(raw)
        .map(to_iso)
        .context(InvalidBoundarySnafu { field, value: raw })
}

/// Builds `{base}/v2/aggs/ticker/{symbol}/range/{multiplier}/{unit}/{from}/{to}`.
///
/// Each segment is percent-encoded with the URL path-segment set: `/`, `%`, `?`,
/// `#`, space and controls are escaped, so a symbol such as `BRK/B` stays one
/// segment. Sub-delimiters that are legal inside a path segment (`:`, `@`, `&`,
/// `=`, `+`, `;`) are sent literally, e.g. `X:BTCUSD` rather than `X%3ABTCUSD`;
/// the provider resolves both spellings to the same ticker.
pub fn aggregates_url(
    base_url: &Url,
    symbol: &str,
    spec: IntervalSpec,
    from: &str,
    to: &str,
) -> Result<Url, ProviderError> {
    let mut url = base_url.clone();
    let multiplier = spec.multiplier.to_string();
    url.path_segments_mut()
        .ok()
        .context(InternalSnafu {
            message: format!("base URL {base_url} cannot carry a request path"),
        })?
        .pop_if_empty()
        .extend([
            "v2",
            "aggs",
            "ticker",
            symbol,
            "range",
            multiplier.as_str(),
            spec.unit.as_str(),
            from,
            to,
        ]);
    Ok(url)
}
