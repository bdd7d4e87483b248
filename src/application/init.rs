//! Initialize ledger use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, LedgerRepository};
use std::fs;
use std::path::Path;

/// Initialize a new ledger at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    tracing::info!(root = %path.display(), "initialized ledger");
    println!("Initialized eggtally ledger at {}", path.display());

    Ok(())
}
