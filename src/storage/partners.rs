//! Partner settings persistence
//!
//! The name/color record lives under its own key, independent of the entry
//! list.

use crate::error::{BudgetError, BudgetResult};
use crate::models::PartnerSettings;

use super::kv::{KeyValueStore, SETTINGS_KEY};

/// Read the partner settings, falling back to defaults when absent or corrupt
pub fn load_partner_settings<S: KeyValueStore + ?Sized>(kv: &S) -> PartnerSettings {
    match kv.get(SETTINGS_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored partner settings are corrupt, using defaults");
            PartnerSettings::default()
        }),
        Ok(None) => PartnerSettings::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read partner settings, using defaults");
            PartnerSettings::default()
        }
    }
}

/// Overwrite the stored partner settings
pub fn save_partner_settings<S: KeyValueStore + ?Sized>(
    kv: &mut S,
    settings: &PartnerSettings,
) -> BudgetResult<()> {
    let json = serde_json::to_string(settings)
        .map_err(|e| BudgetError::Persistence(format!("Failed to serialize settings: {}", e)))?;

    kv.set(SETTINGS_KEY, &json).map_err(|e| match e {
        BudgetError::Persistence(_) => e,
        other => BudgetError::Persistence(other.to_string()),
    })
}
