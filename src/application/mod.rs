//! Application layer - Use cases and orchestration

pub mod export;
pub mod init;
pub mod manage_config;
pub mod manage_entries;
pub mod report;

pub use export::to_csv;
pub use manage_config::ConfigService;
pub use manage_entries::EntryService;
pub use report::ReportService;
