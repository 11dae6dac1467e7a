//! Rendering of record sequences for the terminal.

use std::fmt::Write as _;

use clap::ValueEnum;

use crate::record::Record;

/// Timestamp layout used in table rows.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Line printed in place of a table when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "No objects found.";

const ID_WIDTH: usize = 36;
const NAME_WIDTH: usize = 23;
const RULE_WIDTH: usize = 90;

/// Output format for non-interactive commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width columns.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
    /// YAML sequence.
    Yaml,
}

/// Renders `records` in the requested format.
///
/// # Errors
///
/// Returns an error string if JSON or YAML serialization fails.
pub fn render(records: &[Record], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Table => Ok(render_table(records)),
        OutputFormat::Json => serde_json::to_string_pretty(records)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| format!("Failed to serialize records as JSON: {e}")),
        OutputFormat::Yaml => serde_yaml::to_string(records)
            .map_err(|e| format!("Failed to serialize records as YAML: {e}")),
    }
}

/// Renders `records` as fixed-width columns: id, name, formatted date.
#[must_use]
pub fn render_table(records: &[Record]) -> String {
    if records.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<ID_WIDTH$} | {:<NAME_WIDTH$} | Date", "ID", "Name");
    let _ = writeln!(out, "{:-<RULE_WIDTH$}", "");
    for record in records {
        let _ = writeln!(
            out,
            "{:<ID_WIDTH$} | {:<NAME_WIDTH$} | {}",
            record.id(),
            record.name(),
            record.timestamp().format(DATE_FORMAT),
        );
    }
    out
}
