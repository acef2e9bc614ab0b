use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "marketdeck")]
#[command(about = "Personal brokerage dashboard CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Company profile for a symbol
    Profile { symbol: String },
    /// Latest quote for a symbol
    Quote { symbol: String },
    /// Financial statements (tables embedded in the upstream response)
    Financials {
        symbol: String,
        /// Statement to fetch: income, balance, or cashflow
        #[arg(short, long, default_value = "income")]
        statement: String,
    },
    /// Key statistics and ratios
    Keystats { symbol: String },
    /// Price performance over standard horizons
    Performance { symbol: String },
    /// Broker buy/sell activity over a date range
    Broker {
        broker: String,
        /// Start date, YYYYMMDD (defaults to 7 days ago)
        #[arg(long)]
        from: Option<String>,
        /// End date, YYYYMMDD (defaults to today)
        #[arg(long)]
        to: Option<String>,
        /// Print the compact side-tagged summary instead of the full view
        #[arg(long)]
        summary: bool,
    },
    /// Insider and major-holder activity
    Insider { symbol: String },
    /// List watchlists, or show one by id
    Watchlist {
        #[arg(long)]
        id: Option<u64>,
    },
    /// Free-text symbol/company search
    Search { query: String },
    /// Community stream for a symbol
    Stream { symbol: String },
    /// Exchange the refresh token for a new access token
    Refresh,
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Profile { symbol } => commands::profile::run(&symbol),
        Commands::Quote { symbol } => commands::quote::run(&symbol),
        Commands::Financials { symbol, statement } => {
            commands::financials::run(&symbol, &statement);
        }
        Commands::Keystats { symbol } => commands::keystats::run(&symbol),
        Commands::Performance { symbol } => commands::performance::run(&symbol),
        Commands::Broker {
            broker,
            from,
            to,
            summary,
        } => commands::broker::run(&broker, from.as_deref(), to.as_deref(), summary),
        Commands::Insider { symbol } => commands::insider::run(&symbol),
        Commands::Watchlist { id } => commands::watchlist::run(id),
        Commands::Search { query } => commands::search::run(&query),
        Commands::Stream { symbol } => commands::stream::run(&symbol),
        Commands::Refresh => commands::refresh::run(),
    }
}
