//! Watchlist serializer: raw watchlist payloads into [`Stock`] /
//! [`Watchlist`] records.

use serde_json::Value;

use crate::models::{RawStockItem, Stock, Watchlist};
use crate::utils::{format_magnitude, parse_display_numeric};

/// Normalize one raw watchlist entry.
pub fn serialize_stock(raw: &RawStockItem) -> Stock {
    let last_price = parse_display_numeric(&raw.last);
    let prices: Vec<f64> = raw.prices.iter().map(parse_display_numeric).collect();

    let (open_price, high_price, low_price) = if prices.is_empty() {
        (last_price, last_price, last_price)
    } else {
        let open = prices[0];
        let high = prices.iter().copied().fold(prices[0], f64::max);
        let low = prices.iter().copied().fold(prices[0], f64::min);
        (open, high, low)
    };

    let change = parse_display_numeric(&raw.change);
    let volume = parse_display_numeric(&raw.volume);

    Stock {
        symbol: raw.symbol.clone(),
        name: raw.name.clone(),
        exchange: raw.exchange.clone(),
        icon_url: raw.icon_url.clone(),
        last_price,
        previous_price: parse_display_numeric(&raw.previous),
        open_price,
        high_price,
        low_price,
        change,
        change_percent: parse_display_numeric(&raw.percentage_change),
        is_positive: change > 0.0,
        is_negative: change < 0.0,
        volume,
        volume_display: format_magnitude(volume),
        prices,
        bid: raw
            .bid
            .as_ref()
            .and_then(|side| side.price.as_ref())
            .map(parse_display_numeric),
        offer: raw
            .offer
            .as_ref()
            .and_then(|side| side.price.as_ref())
            .map(parse_display_numeric),
        has_corporate_action: raw.corp_action.unwrap_or(false),
        under_monitoring: raw.unusual_market_activity.unwrap_or(false),
        // Upstream omission must not read as "blocked"
        tradeable: raw.tradeable.unwrap_or(true),
    }
}

/// Normalize a full watchlist response, preserving upstream result order.
/// An absent or malformed result list yields an empty watchlist, never an
/// error.
pub fn serialize_watchlist(response: &Value) -> Watchlist {
    let data = response.get("data").unwrap_or(&Value::Null);

    let stocks = data
        .get("result")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    let raw: RawStockItem =
                        serde_json::from_value(item.clone()).unwrap_or_default();
                    serialize_stock(&raw)
                })
                .collect()
        })
        .unwrap_or_default();

    Watchlist {
        id: data.get("watchlist_id").and_then(Value::as_u64).unwrap_or(0),
        name: string_field(data, "name"),
        description: string_field(data, "description"),
        total: data.get("total").and_then(Value::as_u64).unwrap_or(0),
        is_default: data
            .get("is_default")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        sort_by: string_field(data, "sort_by"),
        sort_order: string_field(data, "sort_order"),
        stocks,
    }
}

fn string_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
