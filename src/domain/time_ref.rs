//! Time reference parsing and resolution

use crate::error::{Result, TallyError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date given relative to today or spelled out as `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    /// Occurrence of a weekday strictly after today
    NextWeekday(Weekday),
    /// Canonical calendar date
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            "tomorrow" => Ok(TimeReference::Tomorrow),
            _ if normalized.starts_with("last ") => parse_weekday(&normalized[5..])
                .map(TimeReference::LastWeekday)
                .ok_or_else(|| TallyError::InvalidTimeReference(input.to_string())),
            _ if normalized.starts_with("next ") => parse_weekday(&normalized[5..])
                .map(TimeReference::NextWeekday)
                .ok_or_else(|| TallyError::InvalidTimeReference(input.to_string())),
            _ => {
                if let Some(weekday) = parse_weekday(&normalized) {
                    return Ok(TimeReference::Weekday(weekday));
                }
                parse_date(&normalized)
                    .map(TimeReference::SpecificDate)
                    .map_err(|_| TallyError::InvalidTimeReference(input.to_string()))
            }
        }
    }

    /// Resolve this time reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Tomorrow => base_date + Duration::days(1),
            TimeReference::Weekday(target) => {
                base_date - Duration::days(days_back(base_date.weekday(), *target))
            }
            TimeReference::LastWeekday(target) => {
                let back = match days_back(base_date.weekday(), *target) {
                    0 => 7,
                    n => n,
                };
                base_date - Duration::days(back)
            }
            TimeReference::NextWeekday(target) => {
                let forward = match days_back(*target, base_date.weekday()) {
                    0 => 7,
                    n => n,
                };
                base_date + Duration::days(forward)
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

/// Parse a canonical `YYYY-MM-DD` date with a four-digit year
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .filter(|date| (0..=9999).contains(&date.year()))
        .ok_or_else(|| TallyError::InvalidTimeReference(input.to_string()))
}

/// Days to step back from `from` to reach the most recent `to`
fn days_back(from: Weekday, to: Weekday) -> i64 {
    ((from.num_days_from_monday() + 7 - to.num_days_from_monday()) % 7) as i64
}

fn parse_weekday(day: &str) -> Option<Weekday> {
    match day.trim() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
