//! Configuration management

use crate::error::{Result, TallyError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// strftime pattern used when printing dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
    pub created: DateTime<Utc>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            date_format: default_date_format(),
            created: Utc::now(),
        }
    }

    /// Load config from .eggtally/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".eggtally").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TallyError::NotLedgerDirectory(path.to_path_buf())
            } else {
                TallyError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TallyError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .eggtally/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(".eggtally");
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Format a date for display
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        // chrono reports bad patterns through fmt::Error
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.to_string();
        }
        out
    }

    /// Reject date patterns chrono cannot render
    pub fn validate_date_format(pattern: &str) -> Result<()> {
        if pattern.trim().is_empty() {
            return Err(TallyError::Config("date_format must not be empty".to_string()));
        }
        let probe = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or(NaiveDate::MIN);
        let mut out = String::new();
        write!(out, "{}", probe.format(pattern))
            .map_err(|_| TallyError::Config(format!("Invalid date_format: '{}'", pattern)))
    }
}
