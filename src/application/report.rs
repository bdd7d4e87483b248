//! Totals and exports over the ledger

use crate::application::export::to_csv;
use crate::domain::{parse_date, DateRange, Period, Summary, Tally, TimeReference};
use crate::error::Result;
use crate::infrastructure::{EntryStore, Storage};
use chrono::NaiveDate;

/// Read-only reporting over a fresh snapshot per call
pub struct ReportService<'a, S: Storage> {
    store: &'a EntryStore<S>,
}

impl<'a, S: Storage> ReportService<'a, S> {
    pub fn new(store: &'a EntryStore<S>) -> Self {
        ReportService { store }
    }

    /// Day, week, month and year totals around a time reference
    pub fn summary(&self, time_ref: &str, today: NaiveDate) -> Result<Summary> {
        let date = resolve(time_ref, today)?;
        let entries = self.store.load();
        Ok(Tally::new(&entries).summary(date))
    }

    /// Total for one period, with the span it covers
    pub fn total(
        &self,
        period: Period,
        time_ref: &str,
        today: NaiveDate,
    ) -> Result<(DateRange, u64)> {
        let date = resolve(time_ref, today)?;
        let entries = self.store.load();
        Ok((period.range_for(date), Tally::new(&entries).sum_for(period, date)))
    }

    /// Inclusive total between two `YYYY-MM-DD` dates
    pub fn range(&self, from: &str, to: &str) -> Result<(DateRange, u64)> {
        let range = DateRange::new(parse_date(from)?, parse_date(to)?);
        let entries = self.store.load();
        Ok((range, Tally::new(&entries).sum_in_range(range.start, range.end)))
    }

    pub fn export_csv(&self) -> String {
        to_csv(&self.store.load())
    }
}

fn resolve(time_ref: &str, today: NaiveDate) -> Result<NaiveDate> {
    Ok(TimeReference::parse(time_ref)?.resolve(today))
}
