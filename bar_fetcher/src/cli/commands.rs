use std::path::PathBuf;

use clap::Parser;

use crate::models::request_params::BarRequest;

/// Fetch one page of historical bars and print them as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a config file (`[polygon]` table); defaults apply without one
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ticker symbol (e.g. "AAPL", "X:BTCUSD")
    #[arg(long)]
    pub symbol: String,

    /// Range start, date ("2024-01-01") or RFC 3339 timestamp
    #[arg(long)]
    pub from: String,

    /// Range end (inclusive), same formats as --from
    #[arg(long)]
    pub to: String,

    /// Interval code: 1m, 5m, 15m, 30m, 1h, 4h, 1d (unknown codes use 1m)
    #[arg(long, default_value = "1m")]
    pub interval: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn request(&self) -> BarRequest {
        BarRequest::new(
            self.symbol.as_str(),
            self.from.as_str(),
            self.to.as_str(),
            self.interval.as_str(),
        )
    }
}
