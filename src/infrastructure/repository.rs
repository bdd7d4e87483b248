//! Ledger directory discovery and layout

use crate::error::{Result, TallyError};
use crate::infrastructure::{Config, EntryStore, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory that marks a ledger root
pub const DATA_DIR: &str = ".eggtally";

/// Environment variable that pins the ledger root
pub const ROOT_ENV: &str = "EGGTALLY_ROOT";

/// Abstract repository for ledger directories
pub trait LedgerRepository {
    /// Load configuration from .eggtally/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .eggtally/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .eggtally directory exists
    fn is_initialized(&self) -> bool;

    /// Create .eggtally directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of LedgerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the ledger root.
    /// EGGTALLY_ROOT wins; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TallyError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'eggtally init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    DATA_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover ledger root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TallyError::NotLedgerDirectory(start.to_path_buf())),
            }
        }
    }

    /// Directory holding config and ledger data
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Entry store persisted under the data directory
    pub fn entry_store(&self) -> EntryStore<FileStorage> {
        EntryStore::new(FileStorage::new(self.data_dir()))
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }
}

impl LedgerRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.data_dir();

        if data_dir.exists() {
            return Err(TallyError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }
}
