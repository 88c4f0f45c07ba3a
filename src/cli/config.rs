//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,
    /// Change application settings
    Set {
        /// Currency symbol printed before amounts
        #[arg(long)]
        currency: Option<String>,
        /// Log filter used when RUST_LOG is unset (e.g. warn, debug)
        #[arg(long)]
        log_level: Option<String>,
        /// Record adds and deletes in the audit log
        #[arg(long)]
        audit: Option<bool>,
    },
}

fn print_config(paths: &BudgetPaths, settings: &Settings) {
    println!("pair-budget Configuration");
    println!("=========================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Data directory:  {}", paths.data_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Log level:       {}", settings.log_level);
    println!("  Audit enabled:   {}", settings.audit_enabled);
}

/// Apply `set` changes to `settings`
fn apply_changes(
    settings: &mut Settings,
    currency: Option<String>,
    log_level: Option<String>,
    audit: Option<bool>,
) -> BudgetResult<()> {
    if currency.is_none() && log_level.is_none() && audit.is_none() {
        return Err(BudgetError::Validation(
            "Nothing to change: pass --currency, --log-level and/or --audit".into(),
        ));
    }

    if let Some(currency) = currency {
        let currency = currency.trim();
        if currency.is_empty() {
            return Err(BudgetError::Validation("Currency symbol cannot be blank".into()));
        }
        settings.currency_symbol = currency.to_string();
    }

    if let Some(level) = log_level {
        let level = level.trim();
        if level.is_empty() {
            return Err(BudgetError::Validation("Log level cannot be blank".into()));
        }
        settings.log_level = level.to_string();
    }

    if let Some(audit) = audit {
        settings.audit_enabled = audit;
    }

    Ok(())
}

/// Handle a config command
pub fn handle_config_command(
    paths: &BudgetPaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> BudgetResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => print_config(paths, settings),

        ConfigCommands::Set {
            currency,
            log_level,
            audit,
        } => {
            let mut updated = settings.clone();
            apply_changes(&mut updated, currency, log_level, audit)?;
            updated.save(paths)?;

            tracing::debug!(path = %paths.settings_file().display(), "saved settings");
            println!("Settings saved");
            print_config(paths, &updated);
        }
    }

    Ok(())
}
