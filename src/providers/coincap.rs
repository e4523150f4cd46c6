//! CoinCap HTTP provider implementation

use crate::{
    constants::{REQUEST_TIMEOUT_SECS, USER_AGENT},
    error::ProviderError,
    provider::MarketDataProvider,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// CoinCap provider
///
/// Issues a single GET per call with a finite timeout and never retries.
pub struct CoinCapProvider {
    client: Client,
}

impl CoinCapProvider {
    /// Creates a new CoinCap provider with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ProviderError::NetworkError)?;

        Ok(Self { client })
    }

    /// Creates a provider with the default timeout
    pub fn with_default_timeout() -> Result<Self, ProviderError> {
        Self::new(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }
}

#[async_trait]
impl MarketDataProvider for CoinCapProvider {
    async fn fetch_body(&self, url: &Url) -> Result<Vec<u8>, ProviderError> {
        tracing::debug!(%url, "Fetching from CoinCap");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;

        let status = response.status();

        // Check for rate limiting
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimitExceeded);
        }

        // Unknown assets come back as 404 with an error payload; the decoder
        // turns that into "not found".
        if !status.is_success() && status != StatusCode::NOT_FOUND {
            let detail = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            return Err(ProviderError::ApiError(format!("HTTP {}: {}", status, detail)));
        }

        let body = response.bytes().await.map_err(ProviderError::from_reqwest)?;

        tracing::debug!(
            status = status.as_u16(),
            body_len = body.len(),
            "Received CoinCap response"
        );

        Ok(body.to_vec())
    }

    fn provider_name(&self) -> &'static str {
        "coincap"
    }
}
