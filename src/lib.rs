//! pair-budget - Shared income and expense tracking for two partners
//!
//! This library provides the core functionality for the pair-budget
//! application. Each partner records income and expense entries; the
//! library totals them per partner or for the household and buckets them
//! into a 14-day daily window for charting.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, money, partners, view scopes)
//! - `storage`: Key-value persistence and the entry store
//! - `reports`: Summary totals and the daily aggregation window
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use pair_budget::reports::summarize;
//! use pair_budget::storage::{BudgetStore, FileStore};
//!
//! let store = BudgetStore::load(FileStore::new(paths.data_dir()));
//! let summary = summarize(store.entries());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::BudgetError;
