//! Display formatting for terminal output
//!
//! Entry lists, summary cards and the daily partner chart.

pub mod chart;
pub mod entry;
pub mod summary;

pub use chart::format_daily_chart;
pub use entry::{format_entry_details, format_entry_list};
pub use summary::{format_summary, scope_label};
