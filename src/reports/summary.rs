//! Income/expense summary
//!
//! Totals for whatever subset of entries the caller passes in. No rounding
//! happens here; two-decimal formatting is left to display.

use crate::models::{Entry, EntryType, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub net: Money,
}

impl Summary {
    pub fn is_surplus(&self) -> bool {
        !self.net.is_negative()
    }
}

/// Sum income and expense over `entries`
pub fn summarize<'a, I>(entries: I) -> Summary
where
    I: IntoIterator<Item = &'a Entry>,
{
    let (total_income, total_expense) =
        entries
            .into_iter()
            .fold((Money::zero(), Money::zero()), |(income, expense), e| {
                match e.entry_type {
                    EntryType::Income => (income + e.amount, expense),
                    EntryType::Expense => (income, expense + e.amount),
                }
            });

    Summary {
        total_income,
        total_expense,
        net: total_income - total_expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryId, NewEntry, Owner};
    use chrono::NaiveDate;

    fn entry(id: i64, cents: i64, entry_type: EntryType, owner: Owner) -> Entry {
        let new = NewEntry::new(
            "test",
            Money::from_cents(cents),
            entry_type,
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            owner,
        )
        .unwrap();
        Entry::from_new(EntryId::from_raw(id), new)
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&Vec::<Entry>::new());
        assert_eq!(summary, Summary::default());
        assert!(summary.net.is_zero());
    }

    #[test]
    fn test_income_and_expense() {
        let entries = vec![
            entry(1, 10000, EntryType::Income, Owner::Partner1),
            entry(2, 4000, EntryType::Expense, Owner::Partner2),
        ];

        let summary = summarize(&entries);
        assert_eq!(summary.total_income, Money::from_cents(10000));
        assert_eq!(summary.total_expense, Money::from_cents(4000));
        assert_eq!(summary.net, Money::from_cents(6000));
        assert!(summary.is_surplus());
    }

    #[test]
    fn test_net_is_exact_with_fractional_amounts() {
        let entries = vec![
            entry(1, 10, EntryType::Income, Owner::Partner1),
            entry(2, 20, EntryType::Income, Owner::Partner1),
            entry(3, 30, EntryType::Expense, Owner::Partner2),
        ];

        let summary = summarize(&entries);
        assert_eq!(summary.net, summary.total_income - summary.total_expense);
        assert!(summary.net.is_zero());
    }

    #[test]
    fn test_deficit() {
        let entries = vec![
            entry(1, 5000, EntryType::Income, Owner::Partner1),
            entry(2, 7525, EntryType::Expense, Owner::Partner1),
        ];

        let summary = summarize(&entries);
        assert_eq!(summary.net, Money::from_cents(-2525));
        assert!(!summary.is_surplus());
    }
}
