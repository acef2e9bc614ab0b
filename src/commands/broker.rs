use chrono::{Duration, Utc};

use crate::error::AppError;
use crate::models::{BrokerActivity, BrokerSummaryRow, Side};
use crate::services;
use crate::utils::format_magnitude;

pub fn run(broker: &str, from: Option<&str>, to: Option<&str>, summary: bool) {
    // Default window: the last 7 calendar days
    let default_from = (Utc::now() - Duration::days(7)).format("%Y%m%d").to_string();
    let default_to = Utc::now().format("%Y%m%d").to_string();
    let from = from.unwrap_or(&default_from).to_string();
    let to = to.unwrap_or(&default_to).to_string();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    let result = rt.block_on(async {
        let client = super::build_client()?;
        let response = client.broker_activity(broker, &from, &to).await?;
        if summary {
            print_summary(&services::serialize_broker_summary(&response));
        } else {
            print_activity(&services::serialize_broker_activity(&response));
        }
        Ok::<(), AppError>(())
    });

    if let Err(e) = result {
        super::exit_with_error(e);
    }
}

fn print_activity(activity: &BrokerActivity) {
    println!(
        "🏦 {} ({})  {} → {}\n",
        activity.broker_name, activity.broker_code, activity.date_from, activity.date_to
    );

    println!("Buy side ({} fills):", activity.buys.len());
    for tx in &activity.buys {
        println!(
            "  {} {:<10} lot {:>10} value {:>10} avg {:>10}",
            tx.date, tx.stock_code, tx.buy_lot_display, tx.buy_value_display, tx.avg_price
        );
    }

    println!("\nSell side ({} fills):", activity.sells.len());
    for tx in &activity.sells {
        println!(
            "  {} {:<10} lot {:>10} value {:>10} avg {:>10}",
            tx.date, tx.stock_code, tx.sell_lot_display, tx.sell_value_display, tx.avg_price
        );
    }

    println!("\nTotals:");
    println!(
        "  buy  {:>12}  ({} lots)",
        activity.total_buy_value_display,
        format_magnitude(activity.total_buy_lot)
    );
    println!(
        "  sell {:>12}  ({} lots)",
        activity.total_sell_value_display,
        format_magnitude(activity.total_sell_lot)
    );
    println!(
        "  net  {:>12}  ({} lots)",
        activity.net_value_display,
        format_magnitude(activity.net_lot)
    );

    let s = &activity.summary;
    println!("\nMarket detector: {}", s.accumulation_status);
    println!(
        "  avg price {}  total value {}  total volume {}  buyers {}  sellers {}",
        s.average_price,
        format_magnitude(s.total_value),
        format_magnitude(s.total_volume),
        s.buyers,
        s.sellers
    );
    for (name, stat) in [
        ("average", &s.average),
        ("5-day avg", &s.five_day_average),
        ("top 1", &s.top1),
        ("top 3", &s.top3),
        ("top 5", &s.top5),
        ("top 10", &s.top10),
    ] {
        println!(
            "  {:<10} {:<14} {:>10} {:>7.2}% vol {}",
            name,
            stat.label,
            format_magnitude(stat.amount),
            stat.percent,
            format_magnitude(stat.volume)
        );
    }
}

fn print_summary(rows: &[BrokerSummaryRow]) {
    println!("🏦 Broker activity summary ({} fills)\n", rows.len());
    for row in rows {
        let tag = match row.side {
            Side::Buy => "BUY ",
            Side::Sell => "SELL",
        };
        println!(
            "  {} {} {:<10} lot {:>10} value {:>10}",
            tag, row.date, row.stock_code, row.lot, row.value_display
        );
    }
}
