use serde::Serialize;

/// One normalized watchlist row, ready for display.
///
/// Built once per API response and never mutated afterwards. Open, high and
/// low are derived from the intraday sample sequence when it is non-empty
/// (open = first sample, high = max, low = min); otherwise all three equal
/// the last price.
#[derive(Debug, Clone, Serialize)]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub icon_url: String,
    pub last_price: f64,
    pub previous_price: f64,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    /// Signed change against the previous close.
    pub change: f64,
    pub change_percent: f64,
    pub is_positive: bool,
    pub is_negative: bool,
    pub volume: f64,
    /// Suffix-scaled volume (`"1.50M"`).
    pub volume_display: String,
    /// Intraday sample prices in upstream order.
    pub prices: Vec<f64>,
    /// Best bid, `None` when the order book side is absent.
    pub bid: Option<f64>,
    /// Best offer, `None` when the order book side is absent.
    pub offer: Option<f64>,
    pub has_corporate_action: bool,
    pub under_monitoring: bool,
    /// Defaults to `true` on upstream omission — a missing field must not
    /// read as "blocked".
    pub tradeable: bool,
}

/// A normalized watchlist: metadata plus its stocks in upstream result order.
#[derive(Debug, Clone, Serialize)]
pub struct Watchlist {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub total: u64,
    pub is_default: bool,
    pub sort_by: String,
    pub sort_order: String,
    pub stocks: Vec<Stock>,
}
