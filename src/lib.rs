//! Core library entry for the `object-tracker` CLI.
//!
//! Records are generated through the [`ports`] traits, held in a
//! [`container::RecordList`], and searched or sorted from the command line
//! or the interactive menu.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod container;
pub mod context;
pub mod display;
pub mod generator;
pub mod ports;
pub mod record;
pub mod session;

pub use container::RecordList;
pub use record::Record;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
