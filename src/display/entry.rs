//! Entry list formatting
//!
//! Renders the running entry list, newest first, with signed amounts and
//! partner names.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Entry, EntryType, PartnerSettings};

/// Shown instead of a table when there is nothing to list
pub const EMPTY_LIST_MESSAGE: &str = "No entries yet. Add your first transaction with `add`!";

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Partner")]
    partner: String,
    #[tabled(rename = "Type")]
    entry_type: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Signed amount as shown in lists, e.g. `+$100.00` or `-$40.00`
pub fn format_signed_amount(entry: &Entry, symbol: &str) -> String {
    let sign = match entry.entry_type {
        EntryType::Income => '+',
        EntryType::Expense => '-',
    };
    format!("{}{}", sign, entry.amount.format_with_symbol(symbol))
}

/// Long-form date, e.g. `January 2, 2026`
pub fn format_long_date(entry: &Entry) -> String {
    entry.date.format("%B %-d, %Y").to_string()
}

/// Format entries as a table
pub fn format_entry_list(entries: &[&Entry], partners: &PartnerSettings, symbol: &str) -> String {
    if entries.is_empty() {
        return format!("{}\n", EMPTY_LIST_MESSAGE);
    }

    let rows = entries.iter().map(|entry| EntryRow {
        id: entry.id.to_string(),
        date: format_long_date(entry),
        description: entry.description.clone(),
        category: entry.category.clone(),
        partner: partners.name_for(entry.owner).to_string(),
        entry_type: entry.entry_type.to_string(),
        amount: format_signed_amount(entry, symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a single entry's details
pub fn format_entry_details(entry: &Entry, partners: &PartnerSettings, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:       {}\n", entry.id));
    output.push_str(&format!("Date:        {}\n", format_long_date(entry)));
    output.push_str(&format!("Description: {}\n", entry.description));
    output.push_str(&format!("Amount:      {}\n", format_signed_amount(entry, symbol)));
    output.push_str(&format!("Type:        {}\n", entry.entry_type));
    output.push_str(&format!("Partner:     {}\n", partners.name_for(entry.owner)));
    output.push_str(&format!("Category:    {}\n", entry.category));

    output
}
