//! Constants for the CoinCap client
//!
//! Compile-time defaults. The API base URL and request timeout can be
//! overridden at runtime (see `config`), everything else is fixed.

/// CoinCap API base URL
pub const COINCAP_API_URL: &str = "https://api.coincap.io/v2";

/// Path segment for asset lookups
pub const ASSETS_ENDPOINT: &str = "assets";

/// Path segment for the market listings of an asset
pub const MARKETS_ENDPOINT: &str = "markets";

/// Number of market listings requested per query
pub const MARKETS_LIMIT: u32 = 20;

/// HTTP request timeout when querying the API (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent for HTTP requests
pub const USER_AGENT: &str = concat!("coincap-cli/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "COINCAP_API_URL";

/// Environment variable overriding the request timeout
pub const TIMEOUT_ENV: &str = "COINCAP_TIMEOUT_SECS";
