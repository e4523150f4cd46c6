//! Runtime configuration
//!
//! Values come from command-line flags, which fall back to the
//! `COINCAP_API_URL` / `COINCAP_TIMEOUT_SECS` environment variables and then
//! to the defaults in `constants`.

use crate::{
    constants::{COINCAP_API_URL, REQUEST_TIMEOUT_SECS},
    error::CliError,
};
use reqwest::Url;
use std::time::Duration;

/// Settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API base URL
    pub api_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Config {
    /// Creates a validated configuration
    ///
    /// The base URL must be an absolute http(s) URL and the timeout must be
    /// non-zero.
    pub fn new(api_url: impl Into<String>, timeout_secs: u64) -> Result<Self, CliError> {
        let api_url = api_url.into();

        let parsed = Url::parse(&api_url)
            .map_err(|e| CliError::config(format!("invalid API URL {}: {}", api_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::config(format!(
                "API URL must use http or https: {}",
                api_url
            )));
        }

        if timeout_secs == 0 {
            return Err(CliError::config("timeout must be greater than zero"));
        }

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: COINCAP_API_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}
