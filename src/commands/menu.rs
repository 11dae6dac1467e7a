//! `object-tracker menu` command.

use std::io::{BufRead, Write};

use crate::container::RecordList;
use crate::session::Session;

/// Execute the interactive menu over the given input and output.
///
/// # Errors
///
/// Returns an error string if reading or writing fails.
pub fn run<R: BufRead, W: Write>(
    records: &mut RecordList,
    input: R,
    output: W,
) -> Result<(), String> {
    Session::new(records, input, output).run()
}
