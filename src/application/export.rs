//! CSV export of the ledger

use crate::domain::Entry;

const HEADER: &str = "date,count,note";

/// Render entries as CSV, one row per entry in the given order.
pub fn to_csv(entries: &[Entry]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(HEADER.to_string());

    for entry in entries {
        rows.push(format!(
            "{},{},{}",
            entry.date.format("%Y-%m-%d"),
            entry.eggs(),
            quote_field(&entry.note)
        ));
    }

    rows.join("\n")
}

/// Quote a field when it holds a delimiter, quote or line break
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
