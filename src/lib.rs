//! eggtally - daily egg count ledger
//!
//! Keeps a local list of dated egg counts and reports totals per day,
//! Monday-based week, month and year.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TallyError;
