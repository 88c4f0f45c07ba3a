//! Audit logging for pair-budget
//!
//! Records every add and delete of an entry in an append-only,
//! line-delimited JSON log (JSONL).
//!
//! - `AuditEntry`: one record with timestamp, operation and an entry
//!   snapshot.
//! - `AuditLogger`: appends records to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
