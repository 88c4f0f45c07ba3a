//! Audit history CLI command

use crate::audit::AuditLogger;
use crate::error::BudgetResult;

/// Print the most recent audit records, oldest first
pub fn handle_history_command(logger: &AuditLogger, limit: usize) -> BudgetResult<()> {
    let records = logger.read_recent(limit)?;

    if records.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for record in &records {
        println!("{}", record.format_human_readable());
    }

    Ok(())
}
