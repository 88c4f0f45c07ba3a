//! Text bar chart for the rolling daily window
//!
//! Each day gets one bar per partner, scaled against the window's
//! floor-clamped maximum, with a five-tick axis underneath.

use crate::models::{Money, Owner, PartnerSettings};
use crate::reports::DailyWindow;

/// Width of a full-scale bar in cells
pub const BAR_WIDTH: usize = 40;

/// Number of axis ticks, zero and the maximum included
pub const TICK_COUNT: usize = 5;

const PARTNER1_CELL: char = '█';
const PARTNER2_CELL: char = '▒';

/// Axis tick values from the maximum down to zero
pub fn axis_ticks(scale_max: Money) -> Vec<Money> {
    let steps = (TICK_COUNT - 1) as i64;
    (0..TICK_COUNT as i64)
        .rev()
        .map(|i| Money::from_cents(scale_max.cents() * i / steps))
        .collect()
}

/// Bar length in cells; any non-zero amount gets at least one cell
pub fn bar_length(amount: Money, scale_max: Money, width: usize) -> usize {
    if !amount.is_positive() || !scale_max.is_positive() || width == 0 {
        return 0;
    }
    let ratio = amount.cents() as f64 / scale_max.cents() as f64;
    ((ratio * width as f64).round() as usize).clamp(1, width)
}

fn tick_label(value: Money, symbol: &str) -> String {
    // Whole units, rounded half up
    format!("{}{}", symbol, (value.cents() + 50) / 100)
}

fn cell_for(owner: Owner) -> char {
    match owner {
        Owner::Partner1 => PARTNER1_CELL,
        Owner::Partner2 => PARTNER2_CELL,
    }
}

fn axis_line(scale_max: Money, symbol: &str) -> String {
    let mut cells = vec![' '; BAR_WIDTH + 12];
    let mut cursor = 0;

    for (i, tick) in axis_ticks(scale_max).into_iter().rev().enumerate() {
        let label: Vec<char> = tick_label(tick, symbol).chars().collect();
        let start = (i * BAR_WIDTH / (TICK_COUNT - 1)).max(cursor);
        if start + label.len() > cells.len() {
            cells.resize(start + label.len(), ' ');
        }
        cells[start..start + label.len()].copy_from_slice(&label);
        cursor = start + label.len() + 1;
    }

    cells.into_iter().collect::<String>().trim_end().to_string()
}

/// Render `window` as horizontal per-partner bars
pub fn format_daily_chart(
    title: &str,
    window: &DailyWindow,
    partners: &PartnerSettings,
    symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(title);
    output.push('\n');

    if let (Some(start), Some(end)) = (window.first_day(), window.end()) {
        output.push_str(&format!("{} to {}\n", start, end));
    }

    let scale_max = window.scale_max();
    let name_width = Owner::ALL
        .iter()
        .map(|o| partners.name_for(*o).chars().count())
        .max()
        .unwrap_or(0);
    let prefix_width = 5 + 1 + name_width + 1;

    for bucket in window.buckets() {
        for (row, owner) in Owner::ALL.iter().enumerate() {
            let amount = bucket.total_for(*owner);
            let len = bar_length(amount, scale_max, BAR_WIDTH);
            let bar: String = std::iter::repeat(cell_for(*owner))
                .take(len)
                .chain(std::iter::repeat(' ').take(BAR_WIDTH - len))
                .collect();
            let label = if row == 0 { bucket.label() } else { String::new() };

            output.push_str(&format!(
                "{:>5} {:<name_width$} |{}| {}\n",
                label,
                partners.name_for(*owner),
                bar,
                amount.format_with_symbol(symbol),
                name_width = name_width,
            ));
        }
    }

    output.push_str(&format!(
        "{:prefix_width$}{}\n",
        "",
        axis_line(scale_max, symbol),
        prefix_width = prefix_width + 1,
    ));
    output.push_str(&format!(
        "Legend: {} {}  {} {}\n",
        PARTNER1_CELL,
        partners.name_for(Owner::Partner1),
        PARTNER2_CELL,
        partners.name_for(Owner::Partner2),
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryId, EntryType, NewEntry};
    use crate::reports::{aggregate_last_14_days, CHART_SCALE_FLOOR};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_axis_ticks() {
        let ticks = axis_ticks(Money::from_cents(40000));
        assert_eq!(
            ticks,
            vec![
                Money::from_cents(40000),
                Money::from_cents(30000),
                Money::from_cents(20000),
                Money::from_cents(10000),
                Money::zero(),
            ]
        );
    }

    #[test]
    fn test_bar_length() {
        let max = Money::from_cents(10000);
        assert_eq!(bar_length(Money::zero(), max, 40), 0);
        assert_eq!(bar_length(Money::from_cents(10000), max, 40), 40);
        assert_eq!(bar_length(Money::from_cents(5000), max, 40), 20);
        // Tiny amounts stay visible
        assert_eq!(bar_length(Money::from_cents(1), max, 40), 1);
        assert_eq!(bar_length(Money::from_cents(100), Money::zero(), 40), 0);
    }

    #[test]
    fn test_empty_chart_uses_floor() {
        let window = aggregate_last_14_days(&Vec::<Entry>::new(), date(2026, 1, 15));
        let output = format_daily_chart("Expenses", &window, &PartnerSettings::default(), "$");

        assert_eq!(window.scale_max(), CHART_SCALE_FLOOR);
        assert!(output.starts_with("Expenses\n2026-01-01 to 2026-01-15\n"));
        assert!(output.contains("$5"));
        assert!(!output.contains(PARTNER1_CELL));
        // Title, range, two rows per day, axis, legend
        assert_eq!(output.lines().count(), 2 + 28 + 2);
    }

    #[test]
    fn test_chart_bars() {
        let reference = date(2026, 1, 15);
        let new = NewEntry::new(
            "Rent",
            Money::from_cents(20000),
            EntryType::Expense,
            reference,
            Owner::Partner2,
        )
        .unwrap();
        let entries = vec![Entry::from_new(EntryId::from_raw(1), new)];
        let window = aggregate_last_14_days(&entries, reference);

        let output = format_daily_chart("Expenses", &window, &PartnerSettings::default(), "$");
        let full_bar: String = std::iter::repeat(PARTNER2_CELL).take(BAR_WIDTH).collect();
        assert!(output.contains(&format!("|{}| $200.00", full_bar)));
        assert!(output.contains(" 1/15 "));
        assert!(output.contains("$200"));
    }
}
