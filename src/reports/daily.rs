//! Rolling daily window
//!
//! Groups entries into a fixed run of calendar days ending at a reference
//! day, summing amounts per partner. The window always has the same number
//! of buckets, empty days included, so a chart drawn from it keeps its
//! shape.
//!
//! A window of `n` buckets counts entries dated from `reference - n` through
//! `reference`. The oldest bucket absorbs the extra leading day, so an entry
//! dated exactly `n` days back lands in the first bucket.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{Entry, Money, Owner};

/// Number of days covered by the chart window
pub const WINDOW_DAYS: usize = 14;

/// Smallest y-axis maximum handed to chart rendering
pub const CHART_SCALE_FLOOR: Money = Money::from_cents(500);

/// One calendar day's totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub partner1_total: Money,
    pub partner2_total: Money,
}

impl DayBucket {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            partner1_total: Money::zero(),
            partner2_total: Money::zero(),
        }
    }

    /// Display label `M/D`, without the year
    pub fn label(&self) -> String {
        format!("{}/{}", self.date.month(), self.date.day())
    }

    pub fn total_for(&self, owner: Owner) -> Money {
        match owner {
            Owner::Partner1 => self.partner1_total,
            Owner::Partner2 => self.partner2_total,
        }
    }

    pub fn combined(&self) -> Money {
        self.partner1_total + self.partner2_total
    }

    fn add(&mut self, owner: Owner, amount: Money) {
        match owner {
            Owner::Partner1 => self.partner1_total += amount,
            Owner::Partner2 => self.partner2_total += amount,
        }
    }
}

/// Buckets for consecutive days, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyWindow {
    buckets: Vec<DayBucket>,
    first_day: Option<NaiveDate>,
}

impl DailyWindow {
    /// Aggregate `entries` over the `days` buckets ending at `reference`
    /// (inclusive)
    ///
    /// Membership is decided on the full date, so the same month and day
    /// in another year never lands in a bucket. Entries dated before
    /// `reference - days` or after `reference` are ignored.
    pub fn aggregate<'a, I>(entries: I, reference: NaiveDate, days: usize) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut buckets: Vec<DayBucket> = (0..days)
            .rev()
            .filter_map(|back| reference.checked_sub_days(Days::new(back as u64)))
            .map(DayBucket::empty)
            .collect();

        let Some(start) = buckets.first().map(|b| b.date) else {
            return Self {
                buckets,
                first_day: None,
            };
        };
        let first_day = start.pred_opt().unwrap_or(start);

        for entry in entries {
            if entry.date < first_day || entry.date > reference {
                continue;
            }
            let offset = (entry.date - start).num_days().max(0) as usize;
            if let Some(bucket) = buckets.get_mut(offset) {
                bucket.add(entry.owner, entry.amount);
            }
        }

        Self {
            buckets,
            first_day: Some(first_day),
        }
    }

    pub fn buckets(&self) -> &[DayBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// First (oldest) day in the window
    pub fn start(&self) -> Option<NaiveDate> {
        self.buckets.first().map(|b| b.date)
    }

    /// Oldest date counted, one day before the first bucket's date
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.first_day
    }

    /// Last day in the window, the reference day
    pub fn end(&self) -> Option<NaiveDate> {
        self.buckets.last().map(|b| b.date)
    }

    /// Sum for one partner across the whole window
    pub fn totals_for(&self, owner: Owner) -> Money {
        self.buckets.iter().map(|b| b.total_for(owner)).sum()
    }

    /// Largest single-partner bucket total
    pub fn max_total(&self) -> Money {
        self.buckets
            .iter()
            .flat_map(|b| [b.partner1_total, b.partner2_total])
            .max()
            .unwrap_or_default()
    }

    /// Y-axis maximum for chart rendering, never below
    /// [`CHART_SCALE_FLOOR`]
    pub fn scale_max(&self) -> Money {
        self.max_total().max(CHART_SCALE_FLOOR)
    }
}

/// Aggregate `entries` into the 14 buckets ending at `reference`
pub fn aggregate_last_14_days<'a, I>(entries: I, reference: NaiveDate) -> DailyWindow
where
    I: IntoIterator<Item = &'a Entry>,
{
    DailyWindow::aggregate(entries, reference, WINDOW_DAYS)
}
