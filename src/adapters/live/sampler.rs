//! Live adapter for the `TimestampSampler` port.

use chrono::{DateTime, Utc};

use crate::adapters::sample_instant;
use crate::ports::TimestampSampler;

/// Samples instants uniformly using the thread-local RNG.
pub struct LiveTimestampSampler;

impl TimestampSampler for LiveTimestampSampler {
    fn sample_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        sample_instant(&mut rand::rng(), start, end)
    }
}
