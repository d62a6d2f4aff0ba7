//! Interval codes and their provider-side (multiplier, unit) form.
//!
//! The set of supported codes is closed:
//!
//! | code | multiplier | unit   |
//! |------|-----------:|--------|
//! | 1m   | 1          | minute |
//! | 5m   | 5          | minute |
//! | 15m  | 15         | minute |
//! | 30m  | 30         | minute |
//! | 1h   | 1          | hour   |
//! | 4h   | 4          | hour   |
//! | 1d   | 1          | day    |
//!
//! ```
//! use bar_fetcher::models::interval::{resolve_interval, IntervalCode, TimeUnit};
//!
//! let resolved = resolve_interval("1h");
//! assert_eq!(resolved.code(), IntervalCode::OneHour);
//! assert_eq!(resolved.spec().unit, TimeUnit::Hour);
//!
//! // Unknown codes never fail, they fall back to one minute.
//! assert!(resolve_interval("7w").is_substituted());
//! ```

use std::{fmt, num::NonZeroU32, str::FromStr};

use nonzero_ext::nonzero;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Interval used whenever the requested code is not supported.
pub const DEFAULT_INTERVAL: IntervalCode = IntervalCode::OneMinute;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported interval code: {0:?}")]
pub struct UnknownIntervalCode(pub String);

/// Aggregation unit understood by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// The path segment form (`minute`, `hour`, `day`).
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An interval = multiplier × unit (e.g. 15-minute, 4-hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalSpec {
    pub multiplier: NonZeroU32,
    pub unit: TimeUnit,
}

impl IntervalSpec {
    pub const fn new(multiplier: NonZeroU32, unit: TimeUnit) -> Self {
        Self { multiplier, unit }
    }
}

/// Supported interval codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalCode {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    FourHours,
    OneDay,
}

impl IntervalCode {
    pub const ALL: [IntervalCode; 7] = [
        IntervalCode::OneMinute,
        IntervalCode::FiveMinutes,
        IntervalCode::FifteenMinutes,
        IntervalCode::ThirtyMinutes,
        IntervalCode::OneHour,
        IntervalCode::FourHours,
        IntervalCode::OneDay,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            IntervalCode::OneMinute => "1m",
            IntervalCode::FiveMinutes => "5m",
            IntervalCode::FifteenMinutes => "15m",
            IntervalCode::ThirtyMinutes => "30m",
            IntervalCode::OneHour => "1h",
            IntervalCode::FourHours => "4h",
            IntervalCode::OneDay => "1d",
        }
    }

    pub fn spec(self) -> IntervalSpec {
        match self {
            IntervalCode::OneMinute => IntervalSpec::new(nonzero!(1u32), TimeUnit::Minute),
            IntervalCode::FiveMinutes => IntervalSpec::new(nonzero!(5u32), TimeUnit::Minute),
            IntervalCode::FifteenMinutes => IntervalSpec::new(nonzero!(15u32), TimeUnit::Minute),
            IntervalCode::ThirtyMinutes => IntervalSpec::new(nonzero!(30u32), TimeUnit::Minute),
            IntervalCode::OneHour => IntervalSpec::new(nonzero!(1u32), TimeUnit::Hour),
            IntervalCode::FourHours => IntervalSpec::new(nonzero!(4u32), TimeUnit::Hour),
            IntervalCode::OneDay => IntervalSpec::new(nonzero!(1u32), TimeUnit::Day),
        }
    }
}

impl fmt::Display for IntervalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match: `"1M"` is not `"1m"`.
impl FromStr for IntervalCode {
    type Err = UnknownIntervalCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntervalCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownIntervalCode(s.to_string()))
    }
}

/// Outcome of looking up a requested interval code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalResolution {
    /// The requested code is supported and was used as-is.
    Honored(IntervalCode),
    /// The requested code is unknown; `fallback` was used instead.
    Substituted {
        requested: String,
        fallback: IntervalCode,
    },
}

impl IntervalResolution {
    pub fn code(&self) -> IntervalCode {
        match self {
            IntervalResolution::Honored(code) => *code,
            IntervalResolution::Substituted { fallback, .. } => *fallback,
        }
    }

    pub fn spec(&self) -> IntervalSpec {
        self.code().spec()
    }

    pub fn is_substituted(&self) -> bool {
        matches!(self, IntervalResolution::Substituted { .. })
    }
}

/// Resolves a raw interval code, falling back to [`DEFAULT_INTERVAL`].
pub fn resolve_interval(requested: &str) -> IntervalResolution {
    match requested.parse::<IntervalCode>() {
        Ok(code) => IntervalResolution::Honored(code),
        Err(UnknownIntervalCode(requested)) => IntervalResolution::Substituted {
            requested,
            fallback: DEFAULT_INTERVAL,
        },
    }
}
