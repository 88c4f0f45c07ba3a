//! Entry export
//!
//! - CSV: spreadsheet-friendly rows
//! - JSON: the persisted entry list format

pub mod csv;
pub mod json;

pub use self::csv::export_entries_csv;
pub use self::json::export_entries_json;
