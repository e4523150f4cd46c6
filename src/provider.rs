//! Provider abstraction for fetching raw responses from the market data API

use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Url;

/// Trait for market data transports
///
/// A provider performs exactly one GET per call and returns the complete
/// response body. Decoding is left to the caller.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches the full response body for `url`
    ///
    /// # Arguments
    /// * `url` - Fully built request URL (see `request::build_url`)
    ///
    /// # Returns
    /// The raw body bytes, or an error if the request could not complete
    async fn fetch_body(&self, url: &Url) -> Result<Vec<u8>, ProviderError>;

    /// Returns the name of this provider
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Canned outcome of a mock fetch
    #[derive(Debug, Clone)]
    enum MockResponse {
        Body(Vec<u8>),
        Timeout,
        RateLimited,
        ApiError(String),
    }

    /// Mock provider for testing
    pub struct MockProvider {
        response: Arc<Mutex<MockResponse>>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl Default for MockProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockProvider {
        pub fn new() -> Self {
            Self {
                response: Arc::new(Mutex::new(MockResponse::Body(Vec::new()))),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
            let provider = Self::new();
            provider.set_body(body);
            provider
        }

        pub fn set_body(&self, body: impl Into<Vec<u8>>) {
            *self.response.lock().unwrap() = MockResponse::Body(body.into());
        }

        pub fn set_timeout(&self) {
            *self.response.lock().unwrap() = MockResponse::Timeout;
        }

        pub fn set_rate_limited(&self) {
            *self.response.lock().unwrap() = MockResponse::RateLimited;
        }

        pub fn set_api_error(&self, msg: &str) {
            *self.response.lock().unwrap() = MockResponse::ApiError(msg.to_string());
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn requested_urls(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        async fn fetch_body(&self, url: &Url) -> Result<Vec<u8>, ProviderError> {
            self.requests.lock().unwrap().push(url.to_string());
            match self.response.lock().unwrap().clone() {
                MockResponse::Body(body) => Ok(body),
                MockResponse::Timeout => Err(ProviderError::Timeout),
                MockResponse::RateLimited => Err(ProviderError::RateLimitExceeded),
                MockResponse::ApiError(msg) => Err(ProviderError::ApiError(msg)),
            }
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
