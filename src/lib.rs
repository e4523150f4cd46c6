//! # CoinCap CLI
//!
//! Looks up the current price and market statistics of a cryptocurrency, or
//! its top exchange listings, from the public CoinCap API.
//!
//! Each invocation performs exactly one GET request. There is no caching,
//! retrying or background polling.
//!
//! ## Usage
//!
//! ```no_run
//! use coincap_cli::{query::run_query, CoinCapProvider, QueryMode};
//! use coincap_cli::constants::COINCAP_API_URL;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = CoinCapProvider::with_default_timeout()?;
//! let mut stdout = std::io::stdout();
//!
//! run_query(&provider, COINCAP_API_URL, "bitcoin", QueryMode::Price, &mut stdout).await?;
//! run_query(&provider, COINCAP_API_URL, "bitcoin", QueryMode::Markets, &mut stdout).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! cli::dispatch
//!     ↓
//! request::build_url
//!     ↓
//! MarketDataProvider (CoinCap, one GET)
//!     ↓
//! decoder::decode_lenient
//!     ↓
//! presenter (render_asset / render_markets)
//! ```
//!
//! ## Error Handling
//!
//! Transport failures (connection, timeout, rate limit, non-2xx other than
//! 404) are returned as [`ProviderError`] and end the process with exit
//! code 1. A body that is not valid JSON is not an error: it decodes to an
//! empty record and prints "Currency not found", or nothing for markets.

pub mod cli;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod presenter;
pub mod provider;
pub mod providers;
pub mod query;
pub mod request;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, ProviderError};
pub use provider::MarketDataProvider;
pub use providers::CoinCapProvider;
pub use types::{AssetRecord, MarketRecord, QueryMode};
