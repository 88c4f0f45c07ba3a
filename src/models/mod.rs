//! Core data models for pair-budget
//!
//! Entries, the money type they carry, view scopes and the partner
//! display settings.

pub mod entry;
pub mod ids;
pub mod money;
pub mod partners;
pub mod scope;

pub use entry::{Entry, EntryInput, EntryType, EntryValidationError, NewEntry, Owner};
pub use ids::EntryId;
pub use money::Money;
pub use partners::PartnerSettings;
pub use scope::ViewScope;
