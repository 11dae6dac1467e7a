//! CLI argument definitions.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::display::OutputFormat;

/// Top-level CLI parser for `object-tracker`.
#[derive(Debug, Parser)]
#[command(
    name = "object-tracker",
    version,
    about = "Generate random objects, then search them by name or sort them by date"
)]
pub struct Cli {
    /// Number of records to generate (overrides `TRACKER_COUNT`).
    #[arg(long, global = true)]
    pub count: Option<usize>,
    /// Seed for reproducible ids, names and dates (overrides `TRACKER_SEED`).
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// RFC 3339 instant used as "now" (overrides `TRACKER_ANCHOR`).
    #[arg(long, global = true)]
    pub anchor: Option<DateTime<Utc>>,
    /// Output format for `list`, `search` and `sort`.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// The command to execute; the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported top-level subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the interactive search/sort menu.
    Menu,
    /// Print every generated record in generation order.
    List,
    /// Print records whose name matches exactly, ignoring case.
    Search {
        /// Full name to look for.
        name: String,
    },
    /// Print records ordered by date.
    Sort {
        /// Newest first instead of oldest first.
        #[arg(long)]
        descending: bool,
    },
}
