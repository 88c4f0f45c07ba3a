//! Entry CLI commands
//!
//! Adding, deleting, listing and showing entries.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_entry_details, format_entry_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{EntryId, EntryInput, EntryType, ViewScope};
use crate::storage::{load_partner_settings, BudgetStore, KeyValueStore};

/// Entry subcommands
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Add an income or expense entry
    Add {
        /// What the money was for
        description: String,
        /// Amount, e.g. "45.50" or "$1,200"
        amount: String,
        /// Entry type (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        entry_type: String,
        /// Partner the entry belongs to (partner1 or partner2)
        #[arg(short, long, default_value = "partner1")]
        owner: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete an entry by ID
    #[command(alias = "rm")]
    Delete {
        /// Entry ID
        id: String,
    },
    /// List entries, newest first
    #[command(alias = "ls")]
    List {
        /// Whose entries to show (all, partner1, partner2)
        #[arg(short, long, default_value = "all")]
        scope: ViewScope,
        /// Only income or only expense entries
        #[arg(short = 't', long = "type")]
        entry_type: Option<EntryType>,
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one entry
    Show {
        /// Entry ID
        id: String,
    },
}

fn parse_id(id: &str) -> BudgetResult<EntryId> {
    id.parse::<EntryId>()
        .map_err(|_| BudgetError::Validation(format!("Invalid entry ID: '{}'", id)))
}

/// Handle an entry command
pub fn handle_entry_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: EntryCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        EntryCommands::Add {
            description,
            amount,
            entry_type,
            owner,
            date,
            category,
        } => {
            let date = match date {
                Some(date) => date,
                None => chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            };

            let input = EntryInput {
                description,
                amount,
                entry_type,
                date,
                owner,
                category,
            };
            let new_entry = input.validate()?;

            let entry = store.add(new_entry)?;
            let partners = load_partner_settings(store.kv());

            println!("Added entry:");
            print!("{}", format_entry_details(&entry, &partners, symbol));
        }

        EntryCommands::Delete { id } => {
            let id = parse_id(&id)?;

            if store.delete(id)? {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with ID {}; nothing deleted", id);
            }
        }

        EntryCommands::List {
            scope,
            entry_type,
            limit,
        } => {
            let mut entries = store.entries_in(scope);
            if let Some(entry_type) = entry_type {
                entries.retain(|e| e.entry_type == entry_type);
            }
            if let Some(limit) = limit {
                entries.truncate(limit);
            }

            let partners = load_partner_settings(store.kv());
            print!("{}", format_entry_list(&entries, &partners, symbol));
        }

        EntryCommands::Show { id } => {
            let id = parse_id(&id)?;
            let entry = store
                .get(id)
                .ok_or_else(|| BudgetError::entry_not_found(id.to_string()))?;

            let partners = load_partner_settings(store.kv());
            print!("{}", format_entry_details(entry, &partners, symbol));
        }
    }

    Ok(())
}
