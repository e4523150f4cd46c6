//! Single-shot query flow
//!
//! ```text
//! build_url → MarketDataProvider::fetch_body → decode_lenient → render → out
//! ```
//!
//! One request per call, never retried. Transport failures are returned to
//! the caller; decode failures are not (see `decoder`).

use crate::{
    decoder::decode_lenient,
    error::{CliError, ProviderError},
    presenter::{render_asset, render_markets},
    provider::MarketDataProvider,
    request::build_url,
    types::{AssetResponse, MarketsResponse, QueryMode},
};
use std::io::Write;

/// Runs one price or markets query and writes the result to `out`
///
/// # Arguments
/// * `provider` - Transport used for the single GET
/// * `api_url` - API base URL
/// * `token` - Asset identifier as typed by the user
/// * `mode` - Price or markets lookup
/// * `out` - Destination for the progress line and the rendered result
pub async fn run_query<W>(
    provider: &dyn MarketDataProvider,
    api_url: &str,
    token: &str,
    mode: QueryMode,
    out: &mut W,
) -> Result<(), CliError>
where
    W: Write + ?Sized,
{
    let token = token.to_lowercase();
    writeln!(out, "Getting {} for {}", mode, token)?;

    // An identifier that cannot be addressed is reported like an unknown
    // asset, without a request.
    let body = match build_url(api_url, &token, mode) {
        Ok(url) => Some(provider.fetch_body(&url).await?),
        Err(ProviderError::InvalidIdentifier(id)) => {
            tracing::info!(identifier = ?id, "Identifier cannot be requested");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = match mode {
        QueryMode::Price => {
            let response: AssetResponse =
                body.as_deref().map(decode_lenient).unwrap_or_default();
            if !response.data.is_found() {
                tracing::info!(token = %token, "Asset not found");
            }
            render_asset(&response.data)
        }
        QueryMode::Markets => {
            let response: MarketsResponse =
                body.as_deref().map(decode_lenient).unwrap_or_default();
            tracing::debug!(token = %token, markets = response.data.len(), "Decoded markets");
            render_markets(&response.data)
        }
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
