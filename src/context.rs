//! Service context bundling all port trait objects.

use chrono::{DateTime, Utc};

use crate::adapters::live::{LiveClock, LiveIdGenerator, LiveNameGenerator, LiveTimestampSampler};
use crate::adapters::seeded::{
    FixedClock, SeededIdGenerator, SeededNameGenerator, SeededTimestampSampler,
};
use crate::ports::{Clock, IdGenerator, NameGenerator, TimestampSampler};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, seeded).
pub struct ServiceContext {
    /// Clock anchoring the timestamp window.
    pub clock: Box<dyn Clock>,
    /// ID generator for record identifiers.
    pub id_gen: Box<dyn IdGenerator>,
    /// Source of display names.
    pub names: Box<dyn NameGenerator>,
    /// Source of record timestamps.
    pub sampler: Box<dyn TimestampSampler>,
}

impl ServiceContext {
    /// Creates a live context: system clock, random UUIDs, thread RNG.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            id_gen: Box::new(LiveIdGenerator),
            names: Box::new(LiveNameGenerator),
            sampler: Box::new(LiveTimestampSampler),
        }
    }

    /// Creates a reproducible context.
    ///
    /// Every port is derived from `seed` and the clock is pinned to
    /// `anchor`, so two contexts built with the same arguments generate
    /// identical records.
    #[must_use]
    pub fn seeded(seed: u64, anchor: DateTime<Utc>) -> Self {
        Self {
            clock: Box::new(FixedClock::new(anchor)),
            id_gen: Box::new(SeededIdGenerator::new(seed)),
            names: Box::new(SeededNameGenerator::new(seed.wrapping_add(1))),
            sampler: Box::new(SeededTimestampSampler::new(seed.wrapping_add(2))),
        }
    }
}
