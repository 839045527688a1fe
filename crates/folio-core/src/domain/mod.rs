mod allocation;
mod date;
mod price_table;
mod ticker;
mod timing;

pub use allocation::{consolidate, Allocation};
pub use date::TradingDate;
pub use price_table::{PriceColumn, PriceTable};
pub use ticker::Ticker;
pub use timing::ContributionTiming;
