//! Request URL construction for the CoinCap API

use crate::{
    constants::{ASSETS_ENDPOINT, MARKETS_ENDPOINT, MARKETS_LIMIT},
    error::ProviderError,
    types::QueryMode,
};
use reqwest::Url;

/// Builds the request URL for an asset query
///
/// # Arguments
/// * `base` - API base URL, e.g. `https://api.coincap.io/v2`
/// * `identifier` - Asset slug as typed by the user
/// * `mode` - Price or markets lookup
///
/// # Returns
/// `<base>/assets/<identifier>` for price mode, with
/// `/markets?limit=20` appended for markets mode. The identifier is
/// lower-cased and percent-encoded as a single path segment.
///
/// An empty identifier, `.` or `..` is rejected with `InvalidIdentifier`:
/// URL normalisation resolves dot segments (including `%2E%2E`), so those
/// identifiers would silently address a different resource.
pub fn build_url(base: &str, identifier: &str, mode: QueryMode) -> Result<Url, ProviderError> {
    let mut url = Url::parse(base)
        .map_err(|e| ProviderError::invalid_url(format!("{}: {}", base, e)))?;

    let identifier = identifier.to_lowercase();
    if matches!(identifier.as_str(), "" | "." | "..") {
        return Err(ProviderError::InvalidIdentifier(identifier));
    }

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ProviderError::invalid_url(format!("{}: not a base URL", base)))?;
        segments
            .pop_if_empty()
            .push(ASSETS_ENDPOINT)
            .push(&identifier);
        if mode == QueryMode::Markets {
            segments.push(MARKETS_ENDPOINT);
        }
    }

    if mode == QueryMode::Markets {
        url.query_pairs_mut()
            .append_pair("limit", &MARKETS_LIMIT.to_string());
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COINCAP_API_URL;

    #[test]
    fn test_price_url() {
        let url = build_url(COINCAP_API_URL, "bitcoin", QueryMode::Price).unwrap();
        assert_eq!(url.as_str(), "https://api.coincap.io/v2/assets/bitcoin");
    }

    #[test]
    fn test_identifier_is_lowercased() {
        for (input, expected) in [
            ("Bitcoin", "bitcoin"),
            ("ETHEREUM", "ethereum"),
            ("Terra-Luna", "terra-luna"),
            ("usd-coin", "usd-coin"),
        ] {
            let url = build_url(COINCAP_API_URL, input, QueryMode::Price).unwrap();
            assert_eq!(url.as_str(), format!("{}/assets/{}", COINCAP_API_URL, expected));
        }
    }

    #[test]
    fn test_markets_url_extends_price_url() {
        for identifier in ["bitcoin", "Dogecoin", "shiba-inu"] {
            let price = build_url(COINCAP_API_URL, identifier, QueryMode::Price).unwrap();
            let markets = build_url(COINCAP_API_URL, identifier, QueryMode::Markets).unwrap();
            assert_eq!(
                markets.as_str(),
                format!("{}/markets?limit=20", price.as_str())
            );
        }
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let url = build_url("https://api.coincap.io/v2/", "bitcoin", QueryMode::Price).unwrap();
        assert_eq!(url.as_str(), "https://api.coincap.io/v2/assets/bitcoin");
    }

    #[test]
    fn test_base_without_path() {
        let url = build_url("http://127.0.0.1:8080", "bitcoin", QueryMode::Markets).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/assets/bitcoin/markets?limit=20"
        );
    }

    #[test]
    fn test_special_characters_are_encoded() {
        let url = build_url(COINCAP_API_URL, "terra luna/x?y", QueryMode::Price).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.coincap.io/v2/assets/terra%20luna%2Fx%3Fy"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = build_url("not a url", "bitcoin", QueryMode::Price).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidUrl(_)));

        let err = build_url("mailto:someone@example.com", "bitcoin", QueryMode::Price).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidUrl(_)));
    }

    #[test]
    fn test_dot_segment_identifiers_are_rejected() {
        for identifier in ["", ".", ".."] {
            for mode in [QueryMode::Price, QueryMode::Markets] {
                let err = build_url(COINCAP_API_URL, identifier, mode).unwrap_err();
                match err {
                    ProviderError::InvalidIdentifier(id) => assert_eq!(id, identifier),
                    other => panic!("unexpected error for {identifier:?}: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_dots_inside_identifier_are_kept() {
        let url = build_url(COINCAP_API_URL, "...", QueryMode::Price).unwrap();
        assert_eq!(url.as_str(), "https://api.coincap.io/v2/assets/...");

        let url = build_url(COINCAP_API_URL, "Crypto.com-Coin", QueryMode::Markets).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.coincap.io/v2/assets/crypto.com-coin/markets?limit=20"
        );
    }
}
