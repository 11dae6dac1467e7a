//! Adapter implementations of the port traits.
//!
//! `live` draws from the system clock and thread-local randomness;
//! `seeded` reproduces the same records for the same seed.

pub mod live;
pub mod seeded;

use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Given names drawn for generated records.
pub(crate) const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Alice", "Amara", "Bob", "Carmen", "Chen", "Dmitri", "Elena", "Farah",
    "Grace", "Hiro", "Ines", "Jamal", "Julia", "Kofi", "Lena", "Marco", "Maya", "Nadia",
    "Omar", "Priya", "Rosa", "Sven", "Tomas", "Yara", "Zoe",
];

/// Family names drawn for generated records.
pub(crate) const LAST_NAMES: &[&str] = &[
    "Adams", "Baker", "Castro", "Diaz", "Evans", "Fischer", "Garcia", "Hopper", "Ivanova",
    "Johnson", "Kim", "Lovelace", "Mensah", "Nakamura", "Okafor", "Patel", "Quinn", "Rossi",
    "Silva", "Turing", "Ueda", "Varga", "Wong", "Young",
];

/// Composes a `"First Last"` name from the built-in pools.
pub(crate) fn compose_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or_default();
    let last = LAST_NAMES.choose(rng).copied().unwrap_or_default();
    format!("{first} {last}")
}

/// Draws a whole-second instant in `start..=end`, or `start` when the
/// window holds no whole second.
pub(crate) fn sample_instant<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let lo = start.timestamp() + i64::from(start.timestamp_subsec_nanos() > 0);
    let hi = end.timestamp();
    if hi < lo {
        return start;
    }
    let secs = rng.random_range(lo..=hi);
    DateTime::from_timestamp(secs, 0).unwrap_or(start)
}
