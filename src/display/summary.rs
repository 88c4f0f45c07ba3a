//! Summary card formatting

use crate::models::{PartnerSettings, ViewScope};
use crate::reports::Summary;

/// Format income, expense and net totals
pub fn format_summary(summary: &Summary, scope_label: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary ({})\n", scope_label));
    output.push_str(&"-".repeat(30));
    output.push('\n');
    output.push_str(&format!(
        "Total Income:   {:>12}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses: {:>12}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net Income:     {:>12}  {}\n",
        summary.net.format_with_symbol(symbol),
        if summary.is_surplus() { "(surplus)" } else { "(deficit)" }
    ));

    output
}

/// Label for a scope using partner names
pub fn scope_label(scope: ViewScope, partners: &PartnerSettings) -> String {
    match scope.owner() {
        Some(owner) => partners.name_for(owner).to_string(),
        None => "both partners".to_string(),
    }
}
