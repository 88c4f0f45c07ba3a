//! Partner display settings
//!
//! Names and colors for the two partners. Only the rendering layer reads
//! these; entries refer to partners by [`Owner`] alone.

use serde::{Deserialize, Serialize};

use super::entry::Owner;

pub const DEFAULT_P1_NAME: &str = "Partner 1";
pub const DEFAULT_P1_COLOR: &str = "#4f46e5";
pub const DEFAULT_P2_NAME: &str = "Partner 2";
pub const DEFAULT_P2_COLOR: &str = "#ec4899";

/// Persisted as `{p1Name, p1Color, p2Name, p2Color}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSettings {
    #[serde(default = "default_p1_name")]
    pub p1_name: String,
    #[serde(default = "default_p1_color")]
    pub p1_color: String,
    #[serde(default = "default_p2_name")]
    pub p2_name: String,
    #[serde(default = "default_p2_color")]
    pub p2_color: String,
}

fn default_p1_name() -> String {
    DEFAULT_P1_NAME.to_string()
}

fn default_p1_color() -> String {
    DEFAULT_P1_COLOR.to_string()
}

fn default_p2_name() -> String {
    DEFAULT_P2_NAME.to_string()
}

fn default_p2_color() -> String {
    DEFAULT_P2_COLOR.to_string()
}

impl Default for PartnerSettings {
    fn default() -> Self {
        Self {
            p1_name: default_p1_name(),
            p1_color: default_p1_color(),
            p2_name: default_p2_name(),
            p2_color: default_p2_color(),
        }
    }
}

impl PartnerSettings {
    pub fn name_for(&self, owner: Owner) -> &str {
        match owner {
            Owner::Partner1 => &self.p1_name,
            Owner::Partner2 => &self.p2_name,
        }
    }

    pub fn color_for(&self, owner: Owner) -> &str {
        match owner {
            Owner::Partner1 => &self.p1_color,
            Owner::Partner2 => &self.p2_color,
        }
    }

    /// Rename a partner; blank names fall back to the default label
    pub fn set_name(&mut self, owner: Owner, name: &str) {
        let name = name.trim();
        let slot = match owner {
            Owner::Partner1 => &mut self.p1_name,
            Owner::Partner2 => &mut self.p2_name,
        };
        *slot = if name.is_empty() {
            match owner {
                Owner::Partner1 => default_p1_name(),
                Owner::Partner2 => default_p2_name(),
            }
        } else {
            name.to_string()
        };
    }

    /// Set a partner's color. Only `#rrggbb` hex values are accepted.
    pub fn set_color(&mut self, owner: Owner, color: &str) -> Result<(), String> {
        let color = color.trim();
        if !is_hex_color(color) {
            return Err(format!("Invalid color '{}': use #rrggbb", color));
        }
        let slot = match owner {
            Owner::Partner1 => &mut self.p1_color,
            Owner::Partner2 => &mut self.p2_color,
        };
        *slot = color.to_lowercase();
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
