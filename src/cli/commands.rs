//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eggtally")]
#[command(about = "Daily egg count ledger", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new ledger
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record eggs collected
    Add {
        /// Number of eggs (whole number >= 0)
        #[arg(allow_negative_numbers = true)]
        count: String,

        /// Collection date (today, yesterday, monday, YYYY-MM-DD, ...)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Free-form note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List entries with the index used by `delete`
    List,

    /// Delete the entry at INDEX as shown by `list`
    Delete {
        index: usize,
    },

    /// Day, week, month and year totals
    Summary {
        /// Reference date (default: today)
        #[arg(value_name = "TIME_REF", num_args = 0.., trailing_var_arg = true)]
        time_ref: Vec<String>,
    },

    /// Total for a single period
    Total {
        /// day, week, month or year
        period: String,

        /// Reference date (default: today)
        #[arg(value_name = "TIME_REF", num_args = 0.., trailing_var_arg = true)]
        time_ref: Vec<String>,
    },

    /// Total between two dates, inclusive
    Range {
        /// Start date (YYYY-MM-DD)
        from: String,

        /// End date (YYYY-MM-DD)
        to: String,
    },

    /// Export entries as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete every entry
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Join a multi-word time reference, defaulting to today
pub fn time_ref_arg(words: &[String]) -> String {
    if words.is_empty() {
        "today".to_string()
    } else {
        words.join(" ")
    }
}
