//! JSON export of entries
//!
//! Writes the same array-of-objects format the store persists, pretty
//! printed, so an export can be loaded back as an entry list.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Entry;

/// Write entries as a pretty-printed JSON array
pub fn export_entries_json<'a, I, W>(entries: I, mut writer: W) -> BudgetResult<usize>
where
    I: IntoIterator<Item = &'a Entry>,
    W: Write,
{
    let entries: Vec<&Entry> = entries.into_iter().collect();

    serde_json::to_writer_pretty(&mut writer, &entries)
        .map_err(|e| BudgetError::Export(format!("Failed to write JSON: {}", e)))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(entries.len())
}
