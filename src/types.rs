//! Types for the CoinCap client
//!
//! Every numeric field is kept as the decimal text the API sends. Nothing
//! here parses prices into floats.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// What a query asks the API for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryMode {
    /// Current price and market statistics of one asset
    Price,
    /// Top exchange listings of one asset
    Markets,
}

impl QueryMode {
    /// Selects the mode from the `--markets` command-line flag
    pub fn from_markets_flag(markets: bool) -> Self {
        if markets {
            QueryMode::Markets
        } else {
            QueryMode::Price
        }
    }

    /// Noun used in progress output ("price" / "markets")
    pub fn noun(&self) -> &'static str {
        match self {
            QueryMode::Price => "price",
            QueryMode::Markets => "markets",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Decimal-as-text as it may appear on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum WireText {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

/// Accepts a string, a number or `null` and keeps it as text.
///
/// `null` (CoinCap sends it for uncapped `maxSupply`) becomes the empty
/// string, same as an absent field.
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<WireText>::deserialize(deserializer)?;
    Ok(match value {
        Some(WireText::Text(text)) => text,
        Some(WireText::Number(number)) => number.to_string(),
        Some(WireText::Bool(flag)) => flag.to_string(),
        None => String::new(),
    })
}

/// A single asset as returned by `GET /assets/{id}`
///
/// An empty `id` means the API did not know the asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetRecord {
    /// Asset slug, e.g. "bitcoin"
    #[serde(deserialize_with = "text_or_empty")]
    pub id: String,

    /// Rank by market capitalization
    #[serde(deserialize_with = "text_or_empty")]
    pub rank: String,

    /// Ticker symbol, e.g. "BTC"
    #[serde(deserialize_with = "text_or_empty")]
    pub symbol: String,

    /// Display name, e.g. "Bitcoin"
    #[serde(deserialize_with = "text_or_empty")]
    pub name: String,

    /// Circulating supply
    #[serde(deserialize_with = "text_or_empty")]
    pub supply: String,

    /// Maximum supply, empty when uncapped
    #[serde(deserialize_with = "text_or_empty")]
    pub max_supply: String,

    /// Market capitalization in USD
    #[serde(deserialize_with = "text_or_empty")]
    pub market_cap_usd: String,

    /// Trading volume over the last 24 hours in USD
    #[serde(rename = "volumeUsd24Hr", deserialize_with = "text_or_empty")]
    pub volume_usd_24h: String,

    /// Current price in USD
    #[serde(deserialize_with = "text_or_empty")]
    pub price_usd: String,

    /// Price change over the last 24 hours, in percent
    #[serde(rename = "changePercent24Hr", deserialize_with = "text_or_empty")]
    pub change_percent_24h: String,

    /// Volume-weighted average price over the last 24 hours
    #[serde(rename = "vwap24Hr", deserialize_with = "text_or_empty")]
    pub vwap_24h: String,
}

impl AssetRecord {
    /// True when the API returned an actual asset
    pub fn is_found(&self) -> bool {
        !self.id.is_empty()
    }
}

/// A trading pair listing as returned by `GET /assets/{id}/markets`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketRecord {
    #[serde(deserialize_with = "text_or_empty")]
    pub exchange_id: String,

    #[serde(deserialize_with = "text_or_empty")]
    pub base_id: String,

    #[serde(deserialize_with = "text_or_empty")]
    pub quote_id: String,

    #[serde(deserialize_with = "text_or_empty")]
    pub quote_symbol: String,

    #[serde(rename = "volumeUsd24Hr", deserialize_with = "text_or_empty")]
    pub volume_usd_24h: String,

    /// Price in USD, denominated in the quote asset
    #[serde(deserialize_with = "text_or_empty")]
    pub price_usd: String,

    /// Share of total 24h volume across the listing
    #[serde(deserialize_with = "text_or_empty")]
    pub volume_percent: String,
}

/// Envelope of the asset endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetResponse {
    pub data: AssetRecord,
}

/// Envelope of the markets endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarketsResponse {
    pub data: Vec<MarketRecord>,
}
