//! Command dispatch and handlers.

pub mod list;
pub mod menu;
pub mod search;
pub mod sort;

use std::io::{self, BufRead, Write};

use chrono::{Duration, Utc};
use tracing::debug;

use crate::adapters::seeded::FixedClock;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::container::RecordList;
use crate::context::ServiceContext;
use crate::display::OutputFormat;
use crate::generator::RecordGenerator;

/// Dispatch a parsed command line to its handler.
///
/// Settings come from the environment first and command-line flags win.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = resolve_config(cli, Config::from_env()?);
    let ctx = build_context(&config);
    let mut records =
        RecordGenerator::new(&ctx, Duration::days(config.window_days)).generate(config.count);

    let command = cli.command.as_ref().unwrap_or(&Command::Menu);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch_with_records(command, &mut records, cli.format, stdin.lock(), &mut out)
}

/// Run a command against already generated records.
///
/// Only the menu reads from `input`; every command writes to `out`.
///
/// # Errors
///
/// Returns an error string if reading, rendering or writing fails.
pub fn dispatch_with_records<R: BufRead, W: Write>(
    command: &Command,
    records: &mut RecordList,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<(), String> {
    match command {
        Command::Menu => menu::run(records, input, out),
        Command::List => list::run(records, format, out),
        Command::Search { name } => search::run(records, name, format, out),
        Command::Sort { descending } => sort::run(records, !descending, format, out),
    }
}

/// Layer command-line flags over environment settings.
fn resolve_config(cli: &Cli, env: Config) -> Config {
    let config = Config {
        count: cli.count.unwrap_or(env.count),
        seed: cli.seed.or(env.seed),
        window_days: env.window_days,
        anchor: cli.anchor.or(env.anchor),
    };
    debug!(?config, "resolved configuration");
    config
}

fn build_context(config: &Config) -> ServiceContext {
    match (config.seed, config.anchor) {
        (Some(seed), anchor) => ServiceContext::seeded(seed, anchor.unwrap_or_else(Utc::now)),
        (None, Some(anchor)) => {
            let mut ctx = ServiceContext::live();
            ctx.clock = Box::new(FixedClock::new(anchor));
            ctx
        }
        (None, None) => ServiceContext::live(),
    }
}

/// Write rendered output, mapping I/O failures to an error string.
pub(crate) fn emit<W: Write>(out: &mut W, text: &str) -> Result<(), String> {
    out.write_all(text.as_bytes()).map_err(|e| format!("Failed to write output: {e}"))
}
