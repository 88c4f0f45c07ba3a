//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_entries_csv, export_entries_json};
use crate::models::{Entry, ViewScope};
use crate::storage::{BudgetStore, KeyValueStore};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path; writes to stdout when omitted
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Whose entries to export (all, partner1, partner2)
    #[arg(short, long, default_value = "all")]
    pub scope: ViewScope,
}

fn write_entries<W: Write>(entries: &[&Entry], format: ExportFormat, writer: W) -> BudgetResult<usize> {
    match format {
        ExportFormat::Csv => export_entries_csv(entries.iter().copied(), writer),
        ExportFormat::Json => export_entries_json(entries.iter().copied(), writer),
    }
}

/// Handle the export command
pub fn handle_export_command<S: KeyValueStore>(
    store: &BudgetStore<S>,
    args: ExportArgs,
) -> BudgetResult<()> {
    let entries = store.entries_in(args.scope);

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let count = write_entries(&entries, args.format, BufWriter::new(file))?;
            println!("Exported {} entries to {}", count, path.display());
        }
        None => {
            let stdout = io::stdout();
            write_entries(&entries, args.format, stdout.lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryType, Money, NewEntry, Owner};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file_respects_scope() {
        let mut store = BudgetStore::load(MemoryStore::new());
        for (desc, owner) in [("Mine", Owner::Partner1), ("Theirs", Owner::Partner2)] {
            let new = NewEntry::new(
                desc,
                Money::from_cents(1000),
                EntryType::Expense,
                NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
                owner,
            )
            .unwrap();
            store.add(new).unwrap();
        }

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        handle_export_command(
            &store,
            ExportArgs {
                output: Some(path.clone()),
                format: ExportFormat::Csv,
                scope: ViewScope::Partner2,
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Theirs"));
        assert!(!contents.contains("Mine"));
    }
}
