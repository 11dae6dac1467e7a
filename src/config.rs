//! Runtime configuration from environment variables.
//!
//! `main` loads a `.env` file first, so these can live there too:
//!
//! - `TRACKER_COUNT`: how many records to generate (default 15)
//! - `TRACKER_SEED`: seed for reproducible generation (default: random)
//! - `TRACKER_WINDOW_DAYS`: how far back timestamps may reach (default 1095)
//! - `TRACKER_ANCHOR`: RFC 3339 instant used as "now" (default: system clock)

use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};

use crate::generator::DEFAULT_WINDOW_DAYS;

/// Default number of generated records.
pub const DEFAULT_COUNT: usize = 15;

/// Widest accepted timestamp window, about a thousand years.
pub const MAX_WINDOW_DAYS: i64 = 365_000;

/// Settings for a tracker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of records to generate.
    pub count: usize,
    /// Seed for reproducible generation; `None` uses live randomness.
    pub seed: Option<u64>,
    /// Width of the timestamp window, in days before now.
    pub window_days: i64,
    /// Fixed "now" for the timestamp window; `None` reads the system clock.
    pub anchor: Option<DateTime<Utc>>,
}

impl Default for Config {
    fn default() -> Self {
        Self { count: DEFAULT_COUNT, seed: None, window_days: DEFAULT_WINDOW_DAYS, anchor: None }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the variable when a value does not parse.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the variable when a value does not parse,
    /// or when the window is negative or wider than [`MAX_WINDOW_DAYS`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let count = parse_var(&lookup, "TRACKER_COUNT")?.unwrap_or(defaults.count);
        let seed = parse_var(&lookup, "TRACKER_SEED")?;
        let window_days =
            parse_var(&lookup, "TRACKER_WINDOW_DAYS")?.unwrap_or(defaults.window_days);
        let anchor = parse_var(&lookup, "TRACKER_ANCHOR")?;
        if window_days < 0 {
            return Err(format!("TRACKER_WINDOW_DAYS must not be negative, got {window_days}"));
        }
        if window_days > MAX_WINDOW_DAYS || TimeDelta::try_days(window_days).is_none() {
            return Err(format!(
                "TRACKER_WINDOW_DAYS must be at most {MAX_WINDOW_DAYS}, got {window_days}"
            ));
        }
        Ok(Self { count, seed, window_days, anchor })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("Invalid value for {key} ({raw:?}): {e}")),
        _ => Ok(None),
    }
}
