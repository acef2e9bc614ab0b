use serde::Serialize;

/// Which side of the book a fill record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

/// Investor origin of a fill, one of two fixed categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestorType {
    Domestic,
    Foreign,
}

impl InvestorType {
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("f") {
            InvestorType::Foreign
        } else {
            InvestorType::Domestic
        }
    }
}

/// One broker buy- or sell-side fill.
///
/// Lot and value are stored as non-negative magnitudes regardless of side;
/// sign lives in `side` and in the signed `net_lot`/`net_value`. Display
/// fields for the opposite side are a `"-"` placeholder since a record is
/// never both a buy and a sell.
#[derive(Debug, Clone, Serialize)]
pub struct BrokerTransaction {
    pub stock_code: String,
    pub broker_code: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub investor: InvestorType,
    pub side: Side,
    pub lot: f64,
    pub value: f64,
    pub avg_price: f64,
    pub net_lot: f64,
    pub net_value: f64,
    pub buy_lot_display: String,
    pub buy_value_display: String,
    pub sell_lot_display: String,
    pub sell_value_display: String,
}

/// A named market-detector statistics bucket ("top 5 broker", "5-day
/// average").
#[derive(Debug, Clone, Serialize)]
pub struct AccumulationStat {
    /// Accumulation/distribution classification label.
    pub label: String,
    pub amount: f64,
    pub percent: f64,
    pub volume: f64,
}

/// Broker-concentration statistics block of a broker-activity response.
#[derive(Debug, Clone, Serialize)]
pub struct MarketDetectorSummary {
    pub average: AccumulationStat,
    pub five_day_average: AccumulationStat,
    pub top1: AccumulationStat,
    pub top3: AccumulationStat,
    pub top5: AccumulationStat,
    pub top10: AccumulationStat,
    pub average_price: f64,
    pub total_value: f64,
    pub total_volume: f64,
    pub buyers: u64,
    pub sellers: u64,
    pub accumulation_status: String,
}

/// Aggregate broker activity over a date range, with totals computed once at
/// serialization time.
#[derive(Debug, Clone, Serialize)]
pub struct BrokerActivity {
    pub broker_code: String,
    pub broker_name: String,
    pub date_from: String,
    pub date_to: String,
    pub summary: MarketDetectorSummary,
    pub buys: Vec<BrokerTransaction>,
    pub sells: Vec<BrokerTransaction>,
    pub total_buy_value: f64,
    pub total_buy_lot: f64,
    pub total_sell_value: f64,
    pub total_sell_lot: f64,
    /// `total_buy_value - total_sell_value`.
    pub net_value: f64,
    /// `total_buy_lot - total_sell_lot`.
    pub net_lot: f64,
    pub total_buy_value_display: String,
    pub total_sell_value_display: String,
    pub net_value_display: String,
}

/// Flattened side-tagged projection of broker activity for the compact view.
#[derive(Debug, Clone, Serialize)]
pub struct BrokerSummaryRow {
    pub side: Side,
    pub stock_code: String,
    pub broker_code: String,
    pub date: String,
    pub lot: f64,
    pub value: f64,
    pub net_lot: f64,
    pub net_value: f64,
    pub value_display: String,
}
