//! Totals over a ledger snapshot
//!
//! Every sum is a full scan filtered by a date predicate. Stored order is
//! never relied on.

use crate::domain::{DateRange, Entry, Period};
use chrono::{Datelike, NaiveDate};

/// Monday-based week containing `date`
pub fn week_bounds(date: NaiveDate) -> DateRange {
    DateRange::week_of(date)
}

/// Read-only view over one snapshot of the ledger
#[derive(Debug, Clone, Copy)]
pub struct Tally<'a> {
    entries: &'a [Entry],
}

/// Totals for every granularity around one reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub date: NaiveDate,
    pub day: u64,
    pub week: DateRange,
    pub week_total: u64,
    pub month: u64,
    pub year: u64,
}

impl<'a> Tally<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Tally { entries }
    }

    pub fn sum_on_date(&self, date: NaiveDate) -> u64 {
        self.sum_where(|d| d == date)
    }

    /// Inclusive on both ends; zero when `start > end`
    pub fn sum_in_range(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        let range = DateRange::new(start, end);
        self.sum_where(|d| range.contains(d))
    }

    pub fn sum_in_week(&self, date: NaiveDate) -> u64 {
        let week = week_bounds(date);
        self.sum_in_range(week.start, week.end)
    }

    pub fn sum_in_month(&self, date: NaiveDate) -> u64 {
        self.sum_where(|d| d.year() == date.year() && d.month() == date.month())
    }

    pub fn sum_in_year(&self, date: NaiveDate) -> u64 {
        self.sum_where(|d| d.year() == date.year())
    }

    /// Total for `period` around `date`
    pub fn sum_for(&self, period: Period, date: NaiveDate) -> u64 {
        match period {
            Period::Day => self.sum_on_date(date),
            Period::Week => self.sum_in_week(date),
            Period::Month => self.sum_in_month(date),
            Period::Year => self.sum_in_year(date),
        }
    }

    pub fn summary(&self, date: NaiveDate) -> Summary {
        let week = week_bounds(date);
        Summary {
            date,
            day: self.sum_on_date(date),
            week,
            week_total: self.sum_in_range(week.start, week.end),
            month: self.sum_in_month(date),
            year: self.sum_in_year(date),
        }
    }

    fn sum_where<F>(&self, predicate: F) -> u64
    where
        F: Fn(NaiveDate) -> bool,
    {
        self.entries
            .iter()
            .filter(|entry| predicate(entry.date))
            .fold(0u64, |acc, entry| acc.saturating_add(entry.eggs()))
    }
}
