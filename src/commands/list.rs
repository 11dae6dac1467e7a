//! `object-tracker list` command.

use std::io::Write;

use crate::container::RecordList;
use crate::display::{render, OutputFormat};

/// Execute the `list` command: every record in generation order.
///
/// # Errors
///
/// Returns an error string if rendering or writing fails.
pub fn run<W: Write>(
    records: &RecordList,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), String> {
    let text = render(&records.to_vec(), format)?;
    super::emit(out, &text)
}
