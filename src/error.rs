//! Error types for the CoinCap client

use thiserror::Error;

/// Errors that can occur when querying the market data API
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network request failed (DNS, connect, TLS, body read)
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Asset identifier cannot be carried as a URL path segment
    #[error("Invalid asset identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Invalid response from provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider API error
    #[error("Provider API error: {0}")]
    ApiError(String),

    /// Timeout waiting for response
    #[error("Request timeout")]
    Timeout,
}

impl ProviderError {
    /// Classifies a reqwest failure, separating timeouts from other
    /// network errors
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::NetworkError(err)
        }
    }

    /// Creates an InvalidUrl error
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}

/// Errors surfaced to the top-level command handler
#[derive(Debug, Error)]
pub enum CliError {
    /// The query failed at the transport or API level
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Writing command output failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Runtime configuration is unusable
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CliError {
    /// Creates a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_is_transparent_in_cli_error() {
        let err = CliError::from(ProviderError::RateLimitExceeded);
        assert_eq!(err.to_string(), "Rate limit exceeded");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_error_message() {
        let err = CliError::config("timeout must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: timeout must be greater than zero"
        );
    }
}
