//! CSV export of entries

use std::io::Write;

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::Entry;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    date: String,
    description: &'a str,
    #[serde(rename = "type")]
    entry_type: &'static str,
    owner: &'static str,
    category: &'a str,
    amount: String,
}

/// Write entries as CSV with a header row, in the order given
pub fn export_entries_csv<'a, I, W>(entries: I, writer: W) -> BudgetResult<usize>
where
    I: IntoIterator<Item = &'a Entry>,
    W: Write,
{
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    let mut count = 0;

    for entry in entries {
        csv_writer.serialize(CsvRow {
            id: entry.id.as_i64(),
            date: entry.date.format("%Y-%m-%d").to_string(),
            description: &entry.description,
            entry_type: entry.entry_type.as_str(),
            owner: entry.owner.as_str(),
            category: &entry.category,
            amount: entry.amount.format_with_symbol(""),
        })?;
        count += 1;
    }

    if count == 0 {
        csv_writer.write_record(["id", "date", "description", "type", "owner", "category", "amount"])?;
    }

    csv_writer.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, EntryType, Money, NewEntry, Owner};
    use chrono::NaiveDate;

    #[test]
    fn test_export_entries() {
        let new = NewEntry::new(
            "Dinner, downtown",
            Money::from_cents(4550),
            EntryType::Expense,
            NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(),
            Owner::Partner1,
        )
        .unwrap()
        .with_category("Dining");
        let entries = vec![Entry::from_new(EntryId::from_raw(9), new)];

        let mut buf = Vec::new();
        let count = export_entries_csv(&entries, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(count, 1);
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("id,date,description,type,owner,category,amount")
        );
        assert_eq!(
            lines.next(),
            Some("9,2026-01-03,\"Dinner, downtown\",expense,partner1,Dining,45.50")
        );
    }

    #[test]
    fn test_export_empty_writes_header() {
        let mut buf = Vec::new();
        let count = export_entries_csv(&Vec::<Entry>::new(), &mut buf).unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,date,description,type,owner,category,amount\n"
        );
    }
}
