//! Reports for pair-budget
//!
//! The rolling daily window behind the partner bar charts and the
//! income/expense summary.

pub mod daily;
pub mod summary;

pub use daily::{aggregate_last_14_days, DailyWindow, DayBucket, CHART_SCALE_FLOOR, WINDOW_DAYS};
pub use summary::{summarize, Summary};
