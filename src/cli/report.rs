//! Report CLI commands
//!
//! Summary totals and the 14-day partner chart.

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{format_daily_chart, format_summary, scope_label};
use crate::error::BudgetResult;
use crate::models::{EntryType, ViewScope};
use crate::reports::{aggregate_last_14_days, summarize, WINDOW_DAYS};
use crate::storage::{load_partner_settings, BudgetStore, KeyValueStore};

use super::parse_date_or_today;

/// Which chart(s) to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Income,
    Expense,
    /// Income chart followed by the expense chart
    Both,
}

impl ChartKind {
    fn entry_types(&self) -> &'static [EntryType] {
        match self {
            Self::Income => &[EntryType::Income],
            Self::Expense => &[EntryType::Expense],
            Self::Both => &[EntryType::Income, EntryType::Expense],
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show total income, total expenses and net
    Summary {
        /// Whose entries to total (all, partner1, partner2)
        #[arg(short, long, default_value = "all")]
        scope: ViewScope,
    },
    /// Draw daily per-partner bars for the last 14 days
    Chart {
        /// Income, expense or both
        #[arg(short, long, value_enum, default_value = "both")]
        kind: ChartKind,
        /// Whose entries to chart (all, partner1, partner2)
        #[arg(short, long, default_value = "all")]
        scope: ViewScope,
        /// Last day of the window (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command<S: KeyValueStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let partners = load_partner_settings(store.kv());

    match cmd {
        ReportCommands::Summary { scope } => {
            let summary = summarize(store.entries_in(scope));
            print!(
                "{}",
                format_summary(&summary, &scope_label(scope, &partners), symbol)
            );
        }

        ReportCommands::Chart { kind, scope, date } => {
            let reference = parse_date_or_today(date.as_deref())?;
            let entries = store.entries_in(scope);

            for (i, entry_type) in kind.entry_types().iter().enumerate() {
                if i > 0 {
                    println!();
                }

                let window = aggregate_last_14_days(
                    entries.iter().copied().filter(|e| e.entry_type == *entry_type),
                    reference,
                );
                let title = match entry_type {
                    EntryType::Income => "Income",
                    EntryType::Expense => "Expenses",
                };

                print!(
                    "{}",
                    format_daily_chart(
                        &format!("{}, last {} days ({})", title, WINDOW_DAYS, scope_label(scope, &partners)),
                        &window,
                        &partners,
                        symbol,
                    )
                );
            }
        }
    }

    Ok(())
}
