//! Calendar granularities for totals

use crate::domain::DateRange;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    /// Monday through Sunday
    Week,
    Month,
    Year,
}

impl Period {
    /// Calendar span of this period around `date`
    pub fn range_for(&self, date: NaiveDate) -> DateRange {
        match self {
            Period::Day => DateRange::day(date),
            Period::Week => DateRange::week_of(date),
            Period::Month => DateRange::month_of(date),
            Period::Year => DateRange::year_of(date),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" => Ok(Period::Day),
            "week" | "weekly" => Ok(Period::Week),
            "month" | "monthly" => Ok(Period::Month),
            "year" | "yearly" => Ok(Period::Year),
            _ => Err(format!(
                "Invalid period: '{}'. Valid periods are: day, week, month, year",
                s
            )),
        }
    }
}
