//! Configuration module for pair-budget
//!
//! - Path resolution for settings, data and the audit log
//! - Application preferences persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
