//! Timestamp sampler port for drawing instants from a time window.

use chrono::{DateTime, Utc};

/// Draws points in time from a window.
pub trait TimestampSampler: Send + Sync {
    /// Returns a whole-second instant in `start..=end`.
    ///
    /// Implementations return `start` when the window is empty or inverted.
    fn sample_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc>;
}
