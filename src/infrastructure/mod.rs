//! Infrastructure layer - Persistence and ledger layout

pub mod config;
pub mod repository;
pub mod storage;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, LedgerRepository};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{EntryStore, LEDGER_KEY};
