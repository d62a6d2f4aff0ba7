//! Historical bar retrieval from the Polygon.io aggregates API.
//!
//! ```no_run
//! use bar_fetcher::{BarFetcher, BarRequest};
//!
//! # async fn run() -> Result<(), bar_fetcher::errors::Error> {
//! let fetcher = BarFetcher::from_env()?;
//! let bars = fetcher
//!     .fetch(&BarRequest::new("AAPL", "2024-01-01", "2024-01-02", "1h"))
//!     .await;
//! println!("{} bars", bars.len());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod providers;

pub use fetcher::BarFetcher;
pub use models::{bar::Bar, request_params::BarRequest};
