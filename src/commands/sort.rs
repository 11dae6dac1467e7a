//! `object-tracker sort` command.

use std::io::Write;

use tracing::info;

use crate::container::RecordList;
use crate::display::{render, OutputFormat};

/// Execute the `sort` command: reorder by date and print the new order.
///
/// # Errors
///
/// Returns an error string if rendering or writing fails.
pub fn run<W: Write>(
    records: &mut RecordList,
    ascending: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), String> {
    info!(ascending, "sorting records by date");
    let sorted = records.sort_by_timestamp(ascending);
    let text = render(&sorted, format)?;
    super::emit(out, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::{TimeZone, Utc};

    #[test]
    fn prints_oldest_first_by_default() {
        let mut records: RecordList = [
            Record::new("new", "N", Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
            Record::new("old", "O", Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
        ]
        .into_iter()
        .collect();
        let mut out = Vec::new();
        run(&mut records, true, OutputFormat::Yaml, &mut out).unwrap();
        let printed: Vec<Record> = serde_yaml::from_slice(&out).unwrap();
        let ids: Vec<&str> = printed.iter().map(Record::id).collect();
        assert_eq!(ids, ["old", "new"]);
    }
}
