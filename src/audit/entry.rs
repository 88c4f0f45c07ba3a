//! Audit entry data structures
//!
//! Defines the operation types and the record written for each mutation
//! of the entry list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Entry, EntryId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entry was added
    Create,
    /// Entry was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entry_id: EntryId,

    /// Human-readable summary, e.g. "2026-01-02 Groceries -$150.00"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Snapshot of the entry after a create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Snapshot of the entry before a delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Record for an added entry
    pub fn create(entry: &Entry) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entry_id: entry.id,
            summary: Some(entry.to_string()),
            after: serde_json::to_value(entry).ok(),
            before: None,
        }
    }

    /// Record for a deleted entry
    pub fn delete(entry: &Entry) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entry_id: entry.id,
            summary: Some(entry.to_string()),
            after: None,
            before: serde_json::to_value(entry).ok(),
        }
    }

    /// One-line rendering for history listings
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "[{}] {} entry {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entry_id
        );
        if let Some(summary) = &self.summary {
            line.push_str(&format!(" ({})", summary));
        }
        line
    }
}
