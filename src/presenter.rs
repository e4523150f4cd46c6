//! Text rendering of decoded records
//!
//! Values are printed exactly as received. No rounding, reformatting or
//! thousands separators.

use crate::types::{AssetRecord, MarketRecord};
use std::fmt::Write;

/// Printed when the API does not know the requested asset
pub const NOT_FOUND_MESSAGE: &str = "Currency not found";

/// Renders an asset, or the not-found message when its id is empty
pub fn render_asset(asset: &AssetRecord) -> String {
    if !asset.is_found() {
        return format!("{}\n", NOT_FOUND_MESSAGE);
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "Currency: {}\n Symbol: {}\n Price: ${}\n Market Cap: ${}\n Volume: {}\n Change: {}%\n Rank: {}\n Supply: {}\n Max Supply: {}\n Vwap: {}\n",
        asset.name,
        asset.symbol,
        asset.price_usd,
        asset.market_cap_usd,
        asset.volume_usd_24h,
        asset.change_percent_24h,
        asset.rank,
        asset.supply,
        asset.max_supply,
        asset.vwap_24h,
    );
    out
}

/// Renders one labelled block per market, in the given order, separated by
/// blank lines. An empty slice renders to an empty string.
pub fn render_markets(markets: &[MarketRecord]) -> String {
    let mut out = String::new();
    for (i, market) in markets.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(
            out,
            "Exchange: {}\nBase: {}\nQuote: {}\nPrice: ${}\nVolume: {}\nVolume Percent: {}\n",
            market.exchange_id,
            market.base_id,
            market.quote_symbol,
            market.price_usd,
            market.volume_usd_24h,
            market.volume_percent,
        );
    }
    out
}
