//! Ledger entries and count normalization

use crate::domain::TimeReference;
use crate::error::{Result, TallyError};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Egg count as it sits in durable storage.
///
/// Entries created through [`Entry::new`] or [`Entry::parse`] always hold an
/// `Integer`. Anything else found on disk is kept as `Other` so a single bad
/// value does not make the whole ledger unreadable; [`to_count`] folds it to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredCount {
    Integer(u64),
    Other(serde_json::Value),
}

impl Default for StoredCount {
    fn default() -> Self {
        StoredCount::Other(serde_json::Value::Null)
    }
}

impl From<u64> for StoredCount {
    fn from(count: u64) -> Self {
        StoredCount::Integer(count)
    }
}

/// Normalize a stored count to an integer.
///
/// Non-negative integers pass through, including integral floats like `3.0`
/// and numeric strings like `"4"`. Everything else counts as 0.
pub fn to_count(value: &StoredCount) -> u64 {
    match value {
        StoredCount::Integer(n) => *n,
        StoredCount::Other(serde_json::Value::Number(n)) => match n.as_f64() {
            Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                f as u64
            }
            _ => 0,
        },
        StoredCount::Other(serde_json::Value::String(s)) => s.trim().parse::<u64>().unwrap_or(0),
        StoredCount::Other(_) => 0,
    }
}

/// One ledger record: eggs collected on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    #[serde(default)]
    pub count: StoredCount,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Entry {
    pub fn new(date: NaiveDate, count: u64, note: impl Into<String>) -> Self {
        Entry {
            date,
            count: StoredCount::Integer(count),
            note: note.into(),
        }
    }

    /// Build an entry from raw user input.
    ///
    /// `date_ref` is a time reference resolved against `today`; `count` must be
    /// a non-negative whole number. The note is trimmed.
    pub fn parse(date_ref: &str, count: &str, note: &str, today: NaiveDate) -> Result<Self> {
        if date_ref.trim().is_empty() {
            return Err(TallyError::Validation("date is required".to_string()));
        }
        let date = TimeReference::parse(date_ref)?.resolve(today);
        let count = parse_count(count)?;

        Ok(Entry::new(date, count, note.trim()))
    }

    /// Count after normalization
    pub fn eggs(&self) -> u64 {
        to_count(&self.count)
    }
}

fn parse_count(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TallyError::Validation("count is required".to_string()));
    }
    if trimmed.starts_with('-') {
        return Err(TallyError::Validation(format!(
            "count must not be negative: {}",
            trimmed
        )));
    }
    trimmed.parse::<u64>().map_err(|_| {
        TallyError::Validation(format!("count must be a whole number: {}", trimmed))
    })
}
