//! Upstream payload shapes.
//!
//! The brokerage API's schema is undocumented and drifts, so every field is
//! optional with a defined absent default. A record that fails to
//! deserialize as a whole degrades to `Default` rather than erroring — one
//! corrupt row must never abort serialization of the rest of the response.

use serde::Deserialize;
use serde_json::Value;

/// A numeric field as the upstream sends it: sometimes a JSON number,
/// sometimes a decimal or scientific-notation string, sometimes missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumeric {
    Number(f64),
    Text(String),
    /// Null, booleans, nested objects — anything else parses as zero later.
    Other(Value),
}

impl Default for RawNumeric {
    fn default() -> Self {
        RawNumeric::Other(Value::Null)
    }
}

/// One side of the order book attached to a watchlist row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOrderSide {
    pub price: Option<RawNumeric>,
}

/// One stock entry of a watchlist response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStockItem {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub icon_url: String,
    pub last: RawNumeric,
    pub previous: RawNumeric,
    pub change: RawNumeric,
    pub percentage_change: RawNumeric,
    pub volume: RawNumeric,
    /// Intraday sample prices, oldest first.
    pub prices: Vec<RawNumeric>,
    pub bid: Option<RawOrderSide>,
    pub offer: Option<RawOrderSide>,
    pub corp_action: Option<bool>,
    pub unusual_market_activity: Option<bool>,
    pub tradeable: Option<bool>,
}

/// One broker fill record. Buy-side fields (`blot`/`bval`/`bavg`) and
/// sell-side fields (`slot`/`sval`/`savg`) arrive on the same shape; the
/// upstream encodes sell lot/value as negative magnitudes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBrokerRow {
    pub stock_code: String,
    pub broker_code: String,
    /// Compact date code, `YYYYMMDD`.
    pub date: String,
    /// Investor origin tag, `"D"` (domestic) or `"F"` (foreign).
    pub investor: String,
    pub blot: RawNumeric,
    pub bval: RawNumeric,
    pub bavg: RawNumeric,
    pub slot: RawNumeric,
    pub sval: RawNumeric,
    pub savg: RawNumeric,
}

/// One market-detector statistics bucket. Values arrive already numeric.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDetectorStat {
    pub status: String,
    pub amount: f64,
    pub percent: f64,
    pub volume: f64,
}

/// Market-detector block of a broker-activity response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDetectorSummary {
    pub average: RawDetectorStat,
    pub five_day_average: RawDetectorStat,
    pub top1: RawDetectorStat,
    pub top3: RawDetectorStat,
    pub top5: RawDetectorStat,
    pub top10: RawDetectorStat,
    pub average_price: f64,
    pub total_value: f64,
    pub total_volume: f64,
    pub buyers: u64,
    pub sellers: u64,
    pub accumulation_status: String,
}
