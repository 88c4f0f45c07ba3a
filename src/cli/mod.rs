//! CLI command handlers
//!
//! Bridges clap argument parsing with the store, reports and display
//! modules.

pub mod config;
pub mod entry;
pub mod export;
pub mod history;
pub mod report;
pub mod settings;

pub use config::{handle_config_command, ConfigCommands};
pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportArgs};
pub use history::handle_history_command;
pub use report::{handle_report_command, ChartKind, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};

/// Parse a `YYYY-MM-DD` argument, defaulting to today
pub(crate) fn parse_date_or_today(date: Option<&str>) -> BudgetResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            BudgetError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
