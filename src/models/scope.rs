//! View scope
//!
//! Selects whose entries a query or a rendered view covers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entry::{Entry, Owner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewScope {
    /// Both partners
    #[default]
    All,
    Partner1,
    Partner2,
}

impl ViewScope {
    /// The owner this scope is restricted to, if any
    pub fn owner(&self) -> Option<Owner> {
        match self {
            Self::All => None,
            Self::Partner1 => Some(Owner::Partner1),
            Self::Partner2 => Some(Owner::Partner2),
        }
    }

    pub fn includes(&self, entry: &Entry) -> bool {
        self.owner().map_or(true, |owner| entry.owner == owner)
    }
}

impl From<Owner> for ViewScope {
    fn from(owner: Owner) -> Self {
        match owner {
            Owner::Partner1 => Self::Partner1,
            Owner::Partner2 => Self::Partner2,
        }
    }
}

impl From<Option<Owner>> for ViewScope {
    fn from(owner: Option<Owner>) -> Self {
        owner.map_or(Self::All, Self::from)
    }
}

impl fmt::Display for ViewScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Partner1 => write!(f, "partner1"),
            Self::Partner2 => write!(f, "partner2"),
        }
    }
}

impl FromStr for ViewScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "both" => Ok(Self::All),
            other => other.parse::<Owner>().map(Self::from).map_err(|_| {
                format!(
                    "Unknown scope '{}' (expected all, partner1 or partner2)",
                    other
                )
            }),
        }
    }
}
