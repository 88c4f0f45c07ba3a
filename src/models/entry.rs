//! Entry model
//!
//! An entry is one income or expense record belonging to one of the two
//! partners. Entries are created from form input, never edited in place,
//! and live until explicitly deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::{self, Money};

/// Category assigned when the form leaves it blank
pub const DEFAULT_CATEGORY: &str = "General";

/// Largest amount a single entry may carry ($1,000,000,000.00)
pub const MAX_ENTRY_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Keep only the entries of this type, preserving order
    pub fn filter<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        entries.iter().filter(|e| e.entry_type == *self).collect()
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown entry type '{}' (expected income or expense)", other)),
        }
    }
}

/// Which partner an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Partner1,
    Partner2,
}

impl Owner {
    pub const ALL: [Owner; 2] = [Owner::Partner1, Owner::Partner2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Partner1 => "partner1",
            Self::Partner2 => "partner2",
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Owner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "partner1" | "p1" => Ok(Self::Partner1),
            "partner2" | "p2" => Ok(Self::Partner2),
            other => Err(format!(
                "Unknown owner '{}' (expected partner1 or partner2)",
                other
            )),
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A stored income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, derived from the creation timestamp
    pub id: EntryId,

    pub description: String,

    /// Always positive; the direction is carried by `entry_type`
    #[serde(
        serialize_with = "money::decimal::serialize",
        deserialize_with = "deserialize_amount"
    )]
    pub amount: Money,

    #[serde(rename = "type")]
    pub entry_type: EntryType,

    pub date: NaiveDate,

    pub owner: Owner,

    #[serde(default = "default_category")]
    pub category: String,
}

impl Entry {
    /// Build a stored entry from validated fields and an assigned id
    pub fn from_new(id: EntryId, new: NewEntry) -> Self {
        Self {
            id,
            description: new.description,
            amount: new.amount,
            entry_type: new.entry_type,
            date: new.date,
            owner: new.owner,
            category: new.category,
        }
    }

    pub fn is_income(&self) -> bool {
        self.entry_type == EntryType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.entry_type == EntryType::Expense
    }

    /// Amount with the sign implied by the entry type
    pub fn signed_amount(&self) -> Money {
        match self.entry_type {
            EntryType::Income => self.amount,
            EntryType::Expense => Money::zero() - self.amount,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validated fields for an entry that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub description: String,
    pub amount: Money,
    pub entry_type: EntryType,
    pub date: NaiveDate,
    pub owner: Owner,
    pub category: String,
}

impl NewEntry {
    /// Create validated fields directly, enforcing the entry invariants
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        entry_type: EntryType,
        date: NaiveDate,
        owner: Owner,
    ) -> Result<Self, EntryValidationError> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(EntryValidationError::MissingDescription);
        }
        check_amount(amount)?;

        Ok(Self {
            description,
            amount,
            entry_type,
            date,
            owner,
            category: default_category(),
        })
    }

    /// Set the category; blank input keeps the default
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into().trim().to_string();
        if !category.is_empty() {
            self.category = category;
        }
        self
    }
}

fn check_amount(amount: Money) -> Result<(), EntryValidationError> {
    if !amount.is_positive() {
        return Err(EntryValidationError::NonPositiveAmount(amount));
    }
    if amount > MAX_ENTRY_AMOUNT {
        return Err(EntryValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

/// Stored amounts must satisfy the same bounds as form input
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let amount = money::decimal::deserialize(deserializer)?;
    check_amount(amount).map_err(serde::de::Error::custom)?;
    Ok(amount)
}

/// Raw candidate fields as supplied by a form
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub description: String,
    pub amount: String,
    pub entry_type: String,
    pub date: String,
    pub owner: String,
    pub category: Option<String>,
}

impl EntryInput {
    /// Check presence and parse every field
    ///
    /// Nothing is persisted for input that fails here.
    pub fn validate(&self) -> Result<NewEntry, EntryValidationError> {
        if self.description.trim().is_empty() {
            return Err(EntryValidationError::MissingDescription);
        }
        if self.amount.trim().is_empty() {
            return Err(EntryValidationError::MissingAmount);
        }
        if self.date.trim().is_empty() {
            return Err(EntryValidationError::MissingDate);
        }

        let amount = Money::parse(&self.amount)
            .map_err(|_| EntryValidationError::InvalidAmount(self.amount.clone()))?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| EntryValidationError::InvalidDate(self.date.clone()))?;
        let entry_type = self
            .entry_type
            .parse::<EntryType>()
            .map_err(EntryValidationError::InvalidType)?;
        let owner = self
            .owner
            .parse::<Owner>()
            .map_err(EntryValidationError::InvalidOwner)?;

        let entry = NewEntry::new(&self.description, amount, entry_type, date, owner)?;
        Ok(match &self.category {
            Some(category) => entry.with_category(category),
            None => entry,
        })
    }
}

/// Validation errors for candidate entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    MissingDescription,
    MissingAmount,
    MissingDate,
    InvalidAmount(String),
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    InvalidDate(String),
    InvalidType(String),
    InvalidOwner(String),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDescription => write!(f, "Description is required"),
            Self::MissingAmount => write!(f, "Amount is required"),
            Self::MissingDate => write!(f, "Date is required"),
            Self::InvalidAmount(s) => write!(f, "Invalid amount: '{}'", s),
            Self::NonPositiveAmount(m) => write!(f, "Amount must be positive, got {}", m),
            Self::AmountTooLarge(m) => {
                write!(f, "Amount {} exceeds the limit of {}", m, MAX_ENTRY_AMOUNT)
            }
            Self::InvalidDate(s) => write!(f, "Invalid date: '{}'. Use YYYY-MM-DD", s),
            Self::InvalidType(msg) | Self::InvalidOwner(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for EntryValidationError {}

impl From<EntryValidationError> for crate::error::BudgetError {
    fn from(err: EntryValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}
