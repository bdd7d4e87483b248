//! Inclusive calendar spans used for bucketing

use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn day(date: NaiveDate) -> Self {
        DateRange::new(date, date)
    }

    /// Monday-to-Sunday week containing `date`
    pub fn week_of(date: NaiveDate) -> Self {
        let back = Duration::days(date.weekday().num_days_from_monday() as i64);
        let start = date.checked_sub_signed(back).unwrap_or(NaiveDate::MIN);
        let end = start
            .checked_add_signed(Duration::days(6))
            .unwrap_or(NaiveDate::MAX);
        DateRange::new(start, end)
    }

    /// First to last day of the month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let next_month = if start.month() == 12 {
            NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
        };
        let end = next_month
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        DateRange::new(start, end)
    }

    /// January 1st to December 31st of the year containing `date`
    pub fn year_of(date: NaiveDate) -> Self {
        let start = date.with_ordinal(1).unwrap_or(date);
        let end = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(NaiveDate::MAX);
        DateRange::new(start, end)
    }

    /// Inclusive on both ends. Empty when `start > end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let len = (self.end - self.start).num_days().max(-1);
        (0..=len).map(move |i| start + Duration::days(i))
    }
}
