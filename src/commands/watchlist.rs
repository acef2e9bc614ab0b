use crate::error::AppError;
use crate::models::Watchlist;
use crate::services;
use crate::utils::format_magnitude_or_dash;

pub fn run(id: Option<u64>) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    let result = rt.block_on(async {
        let client = super::build_client()?;
        match id {
            Some(id) => {
                let response = client.watchlist_detail(id).await?;
                let watchlist = services::serialize_watchlist(&response);
                print_watchlist(&watchlist);
            }
            None => {
                let response = client.watchlists().await?;
                println!("⭐ Watchlists\n");
                super::print_data(&response);
            }
        }
        Ok::<(), AppError>(())
    });

    if let Err(e) = result {
        super::exit_with_error(e);
    }
}

fn print_watchlist(watchlist: &Watchlist) {
    println!("⭐ {} ({} stocks)", watchlist.name, watchlist.stocks.len());
    if !watchlist.description.is_empty() {
        println!("   {}", watchlist.description);
    }
    println!();
    println!(
        "{:<10} {:>10} {:>10} {:>8} {:>10} {:>10} {:>10}",
        "Symbol", "Last", "Change", "Chg%", "Open", "High", "Low"
    );

    for stock in &watchlist.stocks {
        let direction = if stock.is_positive {
            "🟢"
        } else if stock.is_negative {
            "🔴"
        } else {
            "⚪"
        };
        println!(
            "{:<10} {:>10} {:>10} {:>7.2}% {:>10} {:>10} {:>10}  vol {} {}",
            stock.symbol,
            stock.last_price,
            stock.change,
            stock.change_percent,
            stock.open_price,
            stock.high_price,
            stock.low_price,
            format_magnitude_or_dash(stock.volume),
            direction
        );
        if stock.under_monitoring {
            println!("   ⚠️  {} is under exchange monitoring", stock.symbol);
        }
        if !stock.tradeable {
            println!("   ⛔ {} is not tradeable", stock.symbol);
        }
    }
}
