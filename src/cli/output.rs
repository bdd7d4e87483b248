//! Output formatting utilities

use crate::domain::{DateRange, Entry, Summary};
use crate::infrastructure::Config;

/// Format indexed entries for display
pub fn format_entry_list(entries: &[(usize, Entry)], config: &Config) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (index, entry) in entries {
        let line = format!(
            "{:>4}  {}  {:>5}  {}",
            index,
            config.format_date(entry.date),
            entry.eggs(),
            entry.note
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

pub fn format_entry(entry: &Entry, config: &Config) -> String {
    let mut line = format!("{}  {} eggs", config.format_date(entry.date), entry.eggs());
    if !entry.note.is_empty() {
        line.push_str(&format!("  ({})", entry.note));
    }
    line
}

pub fn format_range(range: &DateRange, config: &Config) -> String {
    format!(
        "{} - {}",
        config.format_date(range.start),
        config.format_date(range.end)
    )
}

/// Format the four totals around one reference date
pub fn format_summary(summary: &Summary, config: &Config) -> String {
    format!(
        "Day    {}: {}\n\
        Week   {}: {}\n\
        Month  {}: {}\n\
        Year   {}: {}\n",
        config.format_date(summary.date),
        summary.day,
        format_range(&summary.week, config),
        summary.week_total,
        summary.date.format("%m/%Y"),
        summary.month,
        summary.date.format("%Y"),
        summary.year
    )
}
