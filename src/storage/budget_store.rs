//! Entry list store
//!
//! Owns the entry list, hydrates it from the key-value surface and writes
//! the whole list back after every mutation.

use chrono::{DateTime, Utc};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Entry, EntryId, NewEntry, Owner, ViewScope};

use super::kv::{KeyValueStore, ENTRIES_KEY};

/// The budget's entry list, newest insertion first
pub struct BudgetStore<S: KeyValueStore> {
    kv: S,
    entries: Vec<Entry>,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> BudgetStore<S> {
    /// Hydrate the store from `kv`
    ///
    /// A missing, unreadable or corrupt list starts the store empty; nothing
    /// is reported to the caller beyond a warning in the log.
    pub fn load(kv: S) -> Self {
        let entries = match kv.get(ENTRIES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Entry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, "stored entry list is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored entry list, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = entries.len(), "loaded entries");

        Self {
            kv,
            entries,
            audit: None,
        }
    }

    /// Record every add and delete in `logger`
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Add an entry stamped with the current time
    pub fn add(&mut self, new: NewEntry) -> BudgetResult<Entry> {
        self.add_at(new, Utc::now())
    }

    /// Add an entry whose id derives from `created_at`
    ///
    /// The entry goes to the front of the list and the full list is
    /// persisted. If persisting fails the entry stays in memory, is still
    /// written to the audit log, and `BudgetError::Persistence` is returned.
    pub fn add_at(&mut self, new: NewEntry, created_at: DateTime<Utc>) -> BudgetResult<Entry> {
        let id = self.unique_id(EntryId::from_timestamp(created_at));
        let entry = Entry::from_new(id, new);

        self.entries.insert(0, entry.clone());
        tracing::debug!(id = %entry.id, owner = %entry.owner, "added entry");

        // The entry stands in memory either way, so history records it
        let persisted = self.persist();
        self.record_audit(AuditEntry::create(&entry));
        persisted?;
        Ok(entry)
    }

    /// Remove the entry with `id`
    ///
    /// Returns `false` without touching storage if no entry matches.
    pub fn delete(&mut self, id: EntryId) -> BudgetResult<bool> {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            tracing::debug!(id = %id, "delete of unknown entry ignored");
            return Ok(false);
        };

        let removed = self.entries.remove(pos);
        tracing::debug!(id = %id, "deleted entry");

        let persisted = self.persist();
        self.record_audit(AuditEntry::delete(&removed));
        persisted?;
        Ok(true)
    }

    /// Entries belonging to `owner`, or all entries for `None`
    pub fn entries_for(&self, owner: Option<Owner>) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| owner.map_or(true, |o| e.owner == o))
            .collect()
    }

    /// Entries visible in `scope`
    pub fn entries_in(&self, scope: ViewScope) -> Vec<&Entry> {
        self.entries_for(scope.owner())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite the stored list with the in-memory one
    pub fn persist(&mut self) -> BudgetResult<()> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| BudgetError::Persistence(format!("Failed to serialize entries: {}", e)))?;

        self.kv.set(ENTRIES_KEY, &json).map_err(|e| match e {
            BudgetError::Persistence(_) => e,
            other => BudgetError::Persistence(other.to_string()),
        })
    }

    /// The underlying key-value surface
    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    fn unique_id(&self, candidate: EntryId) -> EntryId {
        if self.entries.iter().any(|e| e.id == candidate) {
            self.entries
                .iter()
                .map(|e| e.id)
                .max()
                .unwrap_or(candidate)
                .next()
        } else {
            candidate
        }
    }

    fn record_audit(&self, record: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&record) {
                tracing::warn!(error = %e, "failed to write audit record");
            }
        }
    }
}
