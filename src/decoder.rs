//! Response body decoding
//!
//! Two policies are offered. `decode_lenient` is what the CLI uses: a body
//! that is not valid JSON yields the default record, which then renders as
//! "not found" (price) or as no output (markets). `decode_strict` reports the
//! failure instead.

use crate::error::ProviderError;
use serde::de::DeserializeOwned;

/// Decodes a JSON body, falling back to `T::default()` when it is malformed
pub fn decode_lenient<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                error = %e,
                body_len = body.len(),
                "Discarding undecodable response body"
            );
            T::default()
        }
    }
}

/// Decodes a JSON body, failing with `InvalidResponse` when it is malformed
pub fn decode_strict<T>(body: &[u8]) -> Result<T, ProviderError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|e| {
        ProviderError::InvalidResponse(format!(
            "Failed to parse CoinCap response: {}. Response: {}",
            e,
            String::from_utf8_lossy(body)
        ))
    })
}
