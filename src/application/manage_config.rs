//! Config management use case

use crate::error::{Result, TallyError};
use crate::infrastructure::{Config, FileSystemRepository, LedgerRepository};

/// Service for managing ledger configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "date_format" => Ok(config.date_format),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TallyError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: date_format, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "date_format" => {
                Config::validate_date_format(value)?;
                config.date_format = value.to_string();
            }
            "created" => {
                return Err(TallyError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TallyError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: date_format",
                    key
                )));
            }
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
