mod broker;
mod raw;
mod stock;
mod table;

pub use broker::{
    AccumulationStat, BrokerActivity, BrokerSummaryRow, BrokerTransaction, InvestorType,
    MarketDetectorSummary, Side,
};
pub use raw::{RawBrokerRow, RawDetectorStat, RawDetectorSummary, RawNumeric, RawOrderSide, RawStockItem};
pub use stock::{Stock, Watchlist};
pub use table::ParsedTable;
