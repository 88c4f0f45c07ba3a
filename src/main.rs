use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pair_budget::audit::AuditLogger;
use pair_budget::cli::{
    handle_config_command, handle_entry_command, handle_export_command, handle_history_command,
    handle_report_command, handle_settings_command,
};
use pair_budget::config::{BudgetPaths, Settings};
use pair_budget::storage::{BudgetStore, FileStore};

#[derive(Parser)]
#[command(
    name = "pairbudget",
    version,
    about = "Shared income and expense tracking for two partners",
    long_about = "pair-budget records income and expense entries for two partners, \
                  totals them per partner or for the household, and charts the \
                  last 14 days from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Entry(pair_budget::cli::EntryCommands),

    #[command(flatten)]
    Report(pair_budget::cli::ReportCommands),

    /// Partner names and colors
    #[command(subcommand)]
    Settings(pair_budget::cli::SettingsCommands),

    /// Export entries as CSV or JSON
    Export(pair_budget::cli::ExportArgs),

    /// Show recent adds and deletes
    History {
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<pair_budget::cli::ConfigCommands>,
    },
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    paths.ensure_directories()?;

    let audit = AuditLogger::new(paths.audit_log());
    let mut store = BudgetStore::load(FileStore::new(paths.data_dir()));
    if settings.audit_enabled {
        store = store.with_audit_log(audit.clone());
    }

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            handle_entry_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(store.kv_mut(), cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&store, args)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&audit, limit)?;
        }
        Some(Commands::Config { action }) => {
            handle_config_command(&paths, &settings, action)?;
        }
        None => {
            println!("pair-budget - Shared budgeting for two partners");
            println!();
            println!("Run 'pairbudget --help' for usage information.");
            println!("Run 'pairbudget add <description> <amount>' to record an entry.");
        }
    }

    Ok(())
}
