//! Seeded adapter for the `TimestampSampler` port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::adapters::sample_instant;
use crate::ports::sampler::TimestampSampler;

/// Samples instants with a seeded RNG.
pub struct SeededTimestampSampler {
    rng: Mutex<StdRng>,
}

impl SeededTimestampSampler {
    /// Creates a sampler whose draws are fixed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl TimestampSampler for SeededTimestampSampler {
    fn sample_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        let mut rng = self.rng.lock().expect("sampler rng lock poisoned");
        sample_instant(&mut *rng, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn same_seed_same_instants() {
        let start = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let a = SeededTimestampSampler::new(3);
        let b = SeededTimestampSampler::new(3);
        for _ in 0..10 {
            let t = a.sample_between(start, end);
            assert_eq!(t, b.sample_between(start, end));
            assert!(t >= start && t <= end);
        }
    }
}
