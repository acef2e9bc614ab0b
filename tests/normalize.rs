//! End-to-end normalization scenarios over canned upstream payloads.

use serde_json::json;

use marketdeck::services::{
    extract_statement_tables, format_statement_table, serialize_broker_activity,
    serialize_broker_summary, serialize_watchlist,
};

#[test]
fn watchlist_with_one_gainer_and_one_loser() {
    let response = json!({
        "data": {
            "watchlist_id": 7,
            "name": "Daily",
            "description": "",
            "total": 2,
            "is_default": false,
            "sort_by": "symbol",
            "sort_order": "asc",
            "result": [
                {
                    "symbol": "BBCA",
                    "name": "Bank Central Asia",
                    "exchange": "IDX",
                    "last": "9,700",
                    "previous": "9,550",
                    "change": "+150",
                    "percentage_change": "+1.57",
                    "volume": "12,500,000",
                    "prices": ["9,550", "9,725", "9,500", "9,700"],
                    "bid": { "price": "9,675" },
                    "offer": { "price": "9,700" }
                },
                {
                    "symbol": "GOTO",
                    "name": "GoTo Gojek Tokopedia",
                    "exchange": "IDX",
                    "last": "86",
                    "previous": "90",
                    "change": "-4",
                    "percentage_change": "-4.44",
                    "volume": "1.2E+09",
                    "prices": []
                }
            ]
        }
    });

    let watchlist = serialize_watchlist(&response);
    assert_eq!(watchlist.stocks.len(), 2);

    let gainer = &watchlist.stocks[0];
    assert!(gainer.is_positive);
    assert!(!gainer.is_negative);
    assert_eq!(gainer.open_price, 9550.0);
    assert_eq!(gainer.high_price, 9725.0);
    assert_eq!(gainer.low_price, 9500.0);
    assert_eq!(gainer.bid, Some(9675.0));
    assert_eq!(gainer.volume_display, "12.50M");

    let loser = &watchlist.stocks[1];
    assert!(loser.is_negative);
    // No intraday samples: open/high/low collapse onto the last price
    assert_eq!(loser.open_price, 86.0);
    assert_eq!(loser.high_price, 86.0);
    assert_eq!(loser.low_price, 86.0);
    assert_eq!(loser.bid, None);
    assert!(loser.tradeable);
    assert_eq!(loser.volume_display, "1.20B");
}

#[test]
fn broker_activity_totals_and_summary_projection_agree() {
    let response = json!({
        "data": {
            "broker_code": "ZP",
            "broker_name": "Example Sekuritas",
            "from": "20240301",
            "to": "20240308",
            "summary": {
                "average": { "status": "accumulation", "amount": 5.0e9, "percent": 18.0, "volume": 2.0e6 },
                "five_day_average": { "status": "accumulation", "amount": 4.0e9, "percent": 15.0, "volume": 1.5e6 },
                "top1": { "status": "distribution", "amount": 9.0e9, "percent": 31.0, "volume": 3.1e6 },
                "top3": { "status": "distribution", "amount": 1.4e10, "percent": 48.0, "volume": 4.8e6 },
                "top5": { "status": "distribution", "amount": 1.8e10, "percent": 61.0, "volume": 6.2e6 },
                "top10": { "status": "distribution", "amount": 2.3e10, "percent": 79.0, "volume": 8.0e6 },
                "average_price": 9650.0,
                "total_value": 2.9e10,
                "total_volume": 1.0e7,
                "buyers": 55,
                "sellers": 48,
                "accumulation_status": "distribution"
            },
            "broker_buy": [
                { "stock_code": "BBCA", "broker_code": "ZP", "date": "20240301",
                  "investor": "D", "blot": "1.0E+03", "bval": "9.7E+09", "bavg": 9700 },
                { "stock_code": "BBCA", "broker_code": "ZP", "date": "20240305",
                  "investor": "F", "blot": "2.5E+03", "bval": "2.425E+10", "bavg": 9700 }
            ],
            "broker_sell": [
                { "stock_code": "BBCA", "broker_code": "ZP", "date": "20240306",
                  "investor": "D", "slot": "-1.5E+03", "sval": "-1.455E+10", "savg": 9700 }
            ]
        }
    });

    let activity = serialize_broker_activity(&response);
    assert_eq!(activity.broker_code, "ZP");
    assert_eq!(activity.date_from, "2024-03-01");
    assert_eq!(activity.buys.len(), 2);
    assert_eq!(activity.sells.len(), 1);

    // Sells are stored as positive magnitudes, sign lives in net
    assert_eq!(activity.sells[0].lot, 1500.0);
    assert_eq!(activity.sells[0].net_lot, -1500.0);

    assert_eq!(activity.total_buy_lot, 3500.0);
    assert_eq!(activity.total_sell_lot, 1500.0);
    assert_eq!(
        activity.net_value,
        activity.total_buy_value - activity.total_sell_value
    );
    assert_eq!(activity.net_lot, 2000.0);
    assert_eq!(activity.summary.accumulation_status, "distribution");
    assert_eq!(activity.summary.top10.percent, 79.0);

    let rows = serialize_broker_summary(&response);
    assert_eq!(rows.len(), 3);
    let net_lot_from_rows: f64 = rows.iter().map(|r| r.net_lot).sum();
    assert_eq!(net_lot_from_rows, activity.net_lot);
}

#[test]
fn statement_tables_from_embedded_html() {
    let response = json!({
        "data": {
            "statements": {
                "period": "FY2023",
                "html_report": "<table><thead><tr><th>Account</th><th>FY2022</th><th>FY2023</th></tr></thead>\
                                <tbody><tr><td>Revenue</td><td>84,500,000,000</td><td>99,900,000,000</td></tr>\
                                <tr><td>Net income</td><td>31,400,000,000</td><td>40,700,000,000</td></tr>\
                                <tr><td></td><td></td><td></td></tr></tbody></table>"
            }
        }
    });

    let tables = extract_statement_tables(&response);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].headers, vec!["Account", "FY2022", "FY2023"]);
    // The all-empty trailing row is dropped
    assert_eq!(tables[0].rows.len(), 2);

    let formatted = format_statement_table(&tables[0]);
    assert_eq!(formatted.rows[0], vec!["Revenue", "84.50B", "99.90B"]);
    assert_eq!(formatted.rows[1], vec!["Net income", "31.40B", "40.70B"]);
}

#[test]
fn empty_payloads_degrade_to_empty_results() {
    assert!(serialize_watchlist(&json!({})).stocks.is_empty());
    assert!(serialize_broker_summary(&json!(null)).is_empty());
    assert!(extract_statement_tables(&json!({ "data": {} })).is_empty());

    let activity = serialize_broker_activity(&json!(null));
    assert_eq!(activity.net_value, 0.0);
    assert_eq!(activity.net_lot, 0.0);
}
