//! Broker-activity serializer.
//!
//! The upstream encodes sell-side lot/value as negative magnitudes; here a
//! sell record stores the positive magnitude and carries the sign in its
//! `net_lot`/`net_value` instead. The compact summary projection is built on
//! the same buy/sell serializers so the sign convention cannot drift between
//! the two views.

use serde_json::Value;

use crate::models::{
    AccumulationStat, BrokerActivity, BrokerSummaryRow, BrokerTransaction, InvestorType,
    MarketDetectorSummary, RawBrokerRow, RawDetectorStat, RawDetectorSummary, Side,
};
use crate::utils::{format_compact_date, format_magnitude, format_magnitude_or_dash, parse_numeric};

/// Normalize one buy-side fill.
pub fn serialize_buy(raw: &RawBrokerRow) -> BrokerTransaction {
    let lot = parse_numeric(&raw.blot);
    let value = parse_numeric(&raw.bval);

    BrokerTransaction {
        stock_code: raw.stock_code.clone(),
        broker_code: raw.broker_code.clone(),
        date: format_compact_date(&raw.date),
        investor: InvestorType::from_code(&raw.investor),
        side: Side::Buy,
        lot,
        value,
        avg_price: parse_numeric(&raw.bavg),
        net_lot: lot,
        net_value: value,
        buy_lot_display: format_magnitude_or_dash(lot),
        buy_value_display: format_magnitude_or_dash(value),
        sell_lot_display: "-".to_string(),
        sell_value_display: "-".to_string(),
    }
}

/// Normalize one sell-side fill. Lot and value become positive magnitudes;
/// the average price is not negated.
pub fn serialize_sell(raw: &RawBrokerRow) -> BrokerTransaction {
    let lot = parse_numeric(&raw.slot).abs();
    let value = parse_numeric(&raw.sval).abs();

    BrokerTransaction {
        stock_code: raw.stock_code.clone(),
        broker_code: raw.broker_code.clone(),
        date: format_compact_date(&raw.date),
        investor: InvestorType::from_code(&raw.investor),
        side: Side::Sell,
        lot,
        value,
        avg_price: parse_numeric(&raw.savg),
        net_lot: -lot,
        net_value: -value,
        buy_lot_display: "-".to_string(),
        buy_value_display: "-".to_string(),
        sell_lot_display: format_magnitude_or_dash(lot),
        sell_value_display: format_magnitude_or_dash(value),
    }
}

/// Rename/passthrough of a detector bucket — values arrive already numeric.
pub fn serialize_detector_stat(raw: &RawDetectorStat) -> AccumulationStat {
    AccumulationStat {
        label: raw.status.clone(),
        amount: raw.amount,
        percent: raw.percent,
        volume: raw.volume,
    }
}

fn serialize_detector_summary(value: &Value) -> MarketDetectorSummary {
    let raw: RawDetectorSummary = serde_json::from_value(value.clone()).unwrap_or_default();
    MarketDetectorSummary {
        average: serialize_detector_stat(&raw.average),
        five_day_average: serialize_detector_stat(&raw.five_day_average),
        top1: serialize_detector_stat(&raw.top1),
        top3: serialize_detector_stat(&raw.top3),
        top5: serialize_detector_stat(&raw.top5),
        top10: serialize_detector_stat(&raw.top10),
        average_price: raw.average_price,
        total_value: raw.total_value,
        total_volume: raw.total_volume,
        buyers: raw.buyers,
        sellers: raw.sellers,
        accumulation_status: raw.accumulation_status,
    }
}

fn transaction_rows(data: &Value, key: &str) -> Vec<RawBrokerRow> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|rows| {
            rows.iter()
                .map(|row| serde_json::from_value(row.clone()).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

/// Normalize a full broker-activity response: buys and sells in upstream
/// order plus the fold aggregates, all computed here, once.
pub fn serialize_broker_activity(response: &Value) -> BrokerActivity {
    let data = response.get("data").unwrap_or(&Value::Null);

    let buys: Vec<BrokerTransaction> = transaction_rows(data, "broker_buy")
        .iter()
        .map(serialize_buy)
        .collect();
    let sells: Vec<BrokerTransaction> = transaction_rows(data, "broker_sell")
        .iter()
        .map(serialize_sell)
        .collect();

    let total_buy_value: f64 = buys.iter().map(|t| t.value).sum();
    let total_buy_lot: f64 = buys.iter().map(|t| t.lot).sum();
    let total_sell_value: f64 = sells.iter().map(|t| t.value).sum();
    let total_sell_lot: f64 = sells.iter().map(|t| t.lot).sum();
    let net_value = total_buy_value - total_sell_value;
    let net_lot = total_buy_lot - total_sell_lot;

    BrokerActivity {
        broker_code: string_field(data, "broker_code"),
        broker_name: string_field(data, "broker_name"),
        date_from: format_compact_date(data.get("from").and_then(Value::as_str).unwrap_or("")),
        date_to: format_compact_date(data.get("to").and_then(Value::as_str).unwrap_or("")),
        summary: serialize_detector_summary(data.get("summary").unwrap_or(&Value::Null)),
        buys,
        sells,
        total_buy_value,
        total_buy_lot,
        total_sell_value,
        total_sell_lot,
        net_value,
        net_lot,
        total_buy_value_display: format_magnitude(total_buy_value),
        total_sell_value_display: format_magnitude(total_sell_value),
        net_value_display: format_magnitude(net_value),
    }
}

/// Compact projection: buys then sells flattened into one side-tagged list.
pub fn serialize_broker_summary(response: &Value) -> Vec<BrokerSummaryRow> {
    let data = response.get("data").unwrap_or(&Value::Null);

    let mut rows = Vec::new();
    for raw in transaction_rows(data, "broker_buy") {
        rows.push(summary_row(serialize_buy(&raw)));
    }
    for raw in transaction_rows(data, "broker_sell") {
        rows.push(summary_row(serialize_sell(&raw)));
    }
    rows
}

fn summary_row(tx: BrokerTransaction) -> BrokerSummaryRow {
    let value_display = format_magnitude_or_dash(tx.value);
    BrokerSummaryRow {
        side: tx.side,
        stock_code: tx.stock_code,
        broker_code: tx.broker_code,
        date: tx.date,
        lot: tx.lot,
        value: tx.value,
        net_lot: tx.net_lot,
        net_value: tx.net_value,
        value_display,
    }
}

fn string_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_row(value: Value) -> RawBrokerRow {
        serde_json::from_value(value).unwrap_or_default()
    }

    #[test]
    fn test_sell_sign_invariant() {
        let tx = serialize_sell(&raw_row(json!({
            "stock_code": "BBCA",
            "broker_code": "YP",
            "date": "20240315",
            "investor": "D",
            "slot": "-1.5E+03",
            "sval": "-1.455E+10",
            "savg": "9.7E+03"
        })));
        assert_eq!(tx.lot, 1500.0);
        assert_eq!(tx.net_lot, -1500.0);
        assert_eq!(tx.value, 14_550_000_000.0);
        assert_eq!(tx.net_value, -14_550_000_000.0);
        // Average price is not negated
        assert_eq!(tx.avg_price, 9700.0);
        assert_eq!(tx.date, "2024-03-15");
        assert_eq!(tx.buy_lot_display, "-");
        assert_eq!(tx.sell_lot_display, "1.50K");
    }

    #[test]
    fn test_buy_transaction() {
        let tx = serialize_buy(&raw_row(json!({
            "stock_code": "TLKM",
            "broker_code": "CC",
            "date": "20240102",
            "investor": "F",
            "blot": 2000,
            "bval": "6.0E+09",
            "bavg": 3000
        })));
        assert_eq!(tx.side, Side::Buy);
        assert_eq!(tx.investor, InvestorType::Foreign);
        assert_eq!(tx.net_lot, 2000.0);
        assert_eq!(tx.net_value, 6_000_000_000.0);
        assert_eq!(tx.buy_value_display, "6.00B");
        assert_eq!(tx.sell_value_display, "-");
    }

    fn activity_fixture() -> Value {
        json!({
            "data": {
                "broker_code": "YP",
                "broker_name": "Example Sekuritas",
                "from": "20240301",
                "to": "20240315",
                "summary": {
                    "average": { "status": "accumulation", "amount": 1.0e9, "percent": 12.5, "volume": 5.0e5 },
                    "top5": { "status": "distribution", "amount": 2.0e9, "percent": 40.0, "volume": 1.0e6 },
                    "average_price": 9650.0,
                    "total_value": 3.0e12,
                    "total_volume": 4.0e8,
                    "buyers": 41,
                    "sellers": 38,
                    "accumulation_status": "accumulation"
                },
                "broker_buy": [
                    { "stock_code": "BBCA", "broker_code": "YP", "date": "20240301", "investor": "D", "blot": "1.0E+03", "bval": "9.7E+09", "bavg": 9700 },
                    { "stock_code": "BBCA", "broker_code": "YP", "date": "20240304", "investor": "F", "blot": 500, "bval": "4.85E+09", "bavg": 9700 }
                ],
                "broker_sell": [
                    { "stock_code": "BBCA", "broker_code": "YP", "date": "20240305", "investor": "D", "slot": "-2.0E+03", "sval": "-1.94E+10", "savg": 9700 }
                ]
            }
        })
    }

    #[test]
    fn test_aggregation_net_identity() {
        let activity = serialize_broker_activity(&activity_fixture());
        assert_eq!(activity.total_buy_lot, 1500.0);
        assert_eq!(activity.total_buy_value, 14_550_000_000.0);
        assert_eq!(activity.total_sell_lot, 2000.0);
        assert_eq!(activity.total_sell_value, 19_400_000_000.0);
        assert_eq!(
            activity.net_value,
            activity.total_buy_value - activity.total_sell_value
        );
        assert_eq!(activity.net_lot, activity.total_buy_lot - activity.total_sell_lot);
        assert_eq!(activity.net_lot, -500.0);
        assert_eq!(activity.total_buy_value_display, "14.55B");
        assert_eq!(activity.net_value_display, "-4.85B");
        assert_eq!(activity.date_from, "2024-03-01");
        assert_eq!(activity.date_to, "2024-03-15");
    }

    #[test]
    fn test_detector_summary_buckets() {
        let activity = serialize_broker_activity(&activity_fixture());
        assert_eq!(activity.summary.average.label, "accumulation");
        assert_eq!(activity.summary.top5.percent, 40.0);
        // Absent buckets default to zeroed stats
        assert_eq!(activity.summary.top1.amount, 0.0);
        assert_eq!(activity.summary.buyers, 41);
        assert_eq!(activity.summary.accumulation_status, "accumulation");
    }

    #[test]
    fn test_empty_sequences_net_zero() {
        let activity = serialize_broker_activity(&json!({ "data": {} }));
        assert!(activity.buys.is_empty());
        assert!(activity.sells.is_empty());
        assert_eq!(activity.net_value, 0.0);
        assert_eq!(activity.net_lot, 0.0);
        assert_eq!(activity.total_buy_value_display, "0");
        assert_eq!(activity.net_value_display, "0");
    }

    #[test]
    fn test_summary_projection_shares_sign_convention() {
        let rows = serialize_broker_summary(&activity_fixture());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].side, Side::Buy);
        assert_eq!(rows[2].side, Side::Sell);
        assert_eq!(rows[2].lot, 2000.0);
        assert_eq!(rows[2].net_lot, -2000.0);
        assert_eq!(rows[2].value_display, "19.40B");

        let net_from_rows: f64 = rows.iter().map(|r| r.net_value).sum();
        let activity = serialize_broker_activity(&activity_fixture());
        assert_eq!(net_from_rows, activity.net_value);
    }
}
