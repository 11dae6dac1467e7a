//! `object-tracker search` command.

use std::io::Write;

use tracing::info;

use crate::container::RecordList;
use crate::display::{render, OutputFormat};

/// Execute the `search` command.
///
/// Prints the records whose name equals `name` ignoring case. No matches
/// is a normal outcome and prints the empty-result message.
///
/// # Errors
///
/// Returns an error string if rendering or writing fails.
pub fn run<W: Write>(
    records: &RecordList,
    name: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), String> {
    let results = records.search_by_name(name);
    info!(name, matches = results.len(), "search complete");
    let text = render(&results, format)?;
    super::emit(out, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::Utc;

    fn records() -> RecordList {
        let now = Utc::now();
        [
            Record::new("1", "Grace Hopper", now),
            Record::new("2", "Alan Turing", now),
            Record::new("3", "grace hopper", now),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn prints_only_exact_matches() {
        let mut out = Vec::new();
        run(&records(), "GRACE HOPPER", OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let ids: Vec<&str> =
            value.as_array().unwrap().iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn partial_name_finds_nothing() {
        let mut out = Vec::new();
        run(&records(), "Grace", OutputFormat::Table, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No objects found.\n");
    }
}
