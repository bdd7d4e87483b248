//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{time_ref_arg, Cli, Commands};
pub use output::{format_entry, format_entry_list, format_range, format_summary};
