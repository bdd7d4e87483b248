//! Domain layer - Ledger model and aggregation

pub mod aggregate;
pub mod date_range;
pub mod entry;
pub mod period;
pub mod time_ref;

pub use aggregate::{week_bounds, Summary, Tally};
pub use date_range::DateRange;
pub use entry::{to_count, Entry, StoredCount};
pub use period::Period;
pub use time_ref::{parse_date, TimeReference};
