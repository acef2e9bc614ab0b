pub mod broker;
pub mod client;
pub mod financials;
pub mod html_table;
pub mod watchlist;

pub use broker::{
    serialize_broker_activity, serialize_broker_summary, serialize_buy, serialize_detector_stat,
    serialize_sell,
};
pub use client::{refresh_access_token, AccessToken, DashboardClient, TokenPair};
pub use financials::{extract_statement_tables, format_statement_cell, format_statement_table};
pub use html_table::{locate_embedded_html, parse_html_tables};
pub use watchlist::{serialize_stock, serialize_watchlist};
