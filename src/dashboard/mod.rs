//! Dashboard module
//!
//! Provides the tracker page showing the entry form, all-time totals, this
//! month's overview and the transaction list.

mod aggregation;
mod cards;
mod handlers;

pub use aggregation::{CategoryTotal, MonthlySummary, Summary, Totals, summarize};
pub use handlers::get_dashboard_page;
