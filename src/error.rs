//! Error types for eggtally

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for eggtally
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Not an eggtally directory: {0}")]
    NotLedgerDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("No entry at index {index} (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Aborted: {0}")]
    Aborted(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TallyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TallyError::NotLedgerDirectory(_) => 2,
            TallyError::InvalidTimeReference(_) => 3,
            TallyError::Validation(_) => 4,
            TallyError::IndexOutOfRange { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TallyError::NotLedgerDirectory(path) => {
                format!(
                    "Not an eggtally directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'eggtally init' in this directory to create a new ledger\n\
                    • Navigate to an existing ledger directory\n\
                    • Set EGGTALLY_ROOT environment variable to your ledger path",
                    path.display()
                )
            }
            TallyError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-08)\n\n\
                    Examples:\n\
                    eggtally add 6 --date yesterday\n\
                    eggtally summary last monday\n\
                    eggtally total week 2024-01-08",
                    ref_str
                )
            }
            TallyError::Validation(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    The egg count must be a whole number >= 0.\n\
                    Example: eggtally add 12 --date today --note \"morning round\"",
                    msg
                )
            }
            TallyError::IndexOutOfRange { index, len } => {
                if *len == 0 {
                    format!("No entry at index {}: the ledger is empty", index)
                } else {
                    format!(
                        "No entry at index {} (valid indices: 0..={})\n\n\
                        Use 'eggtally list' to see current indices",
                        index,
                        len - 1
                    )
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TallyError
pub type Result<T> = std::result::Result<T, TallyError>;
