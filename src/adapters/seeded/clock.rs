//! Clock pinned to a single instant.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Clock that always reports the instant it was built with.
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock stuck at `instant`.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
