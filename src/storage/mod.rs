//! Storage layer for pair-budget
//!
//! A key-value persistence surface (file-backed or in-memory), the entry
//! list store on top of it, and partner settings persistence.

pub mod budget_store;
pub mod file_io;
pub mod kv;
pub mod partners;

pub use budget_store::BudgetStore;
pub use file_io::{read_text, write_text_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore, ENTRIES_KEY, SETTINGS_KEY};
pub use partners::{load_partner_settings, save_partner_settings};
