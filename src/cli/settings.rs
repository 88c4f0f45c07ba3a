//! Partner settings CLI commands

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Owner, PartnerSettings};
use crate::storage::{load_partner_settings, save_partner_settings, KeyValueStore};

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show partner names and colors
    Show,
    /// Change a partner's name and/or color
    Set {
        /// Partner to change (partner1 or partner2)
        partner: Owner,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Bar color as #rrggbb
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Restore default names and colors
    Reset,
}

fn print_partners(partners: &PartnerSettings) {
    for owner in Owner::ALL {
        println!(
            "{:<9} {:<20} {}",
            owner,
            partners.name_for(owner),
            partners.color_for(owner)
        );
    }
}

/// Handle a settings command
pub fn handle_settings_command<S: KeyValueStore + ?Sized>(
    kv: &mut S,
    cmd: SettingsCommands,
) -> BudgetResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print_partners(&load_partner_settings(&*kv));
        }

        SettingsCommands::Set {
            partner,
            name,
            color,
        } => {
            if name.is_none() && color.is_none() {
                return Err(BudgetError::Validation(
                    "Nothing to change: pass --name and/or --color".into(),
                ));
            }

            let mut partners = load_partner_settings(&*kv);
            if let Some(name) = name {
                partners.set_name(partner, &name);
            }
            if let Some(color) = color {
                partners.set_color(partner, &color).map_err(BudgetError::Validation)?;
            }

            save_partner_settings(kv, &partners)?;
            println!("Updated {}", partner);
            print_partners(&partners);
        }

        SettingsCommands::Reset => {
            let partners = PartnerSettings::default();
            save_partner_settings(kv, &partners)?;
            println!("Partner settings reset");
            print_partners(&partners);
        }
    }

    Ok(())
}
