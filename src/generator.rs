//! Synthetic record generation.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use tracing::info;

use crate::container::RecordList;
use crate::context::ServiceContext;
use crate::record::Record;

/// Default look-back window: roughly three years.
pub const DEFAULT_WINDOW_DAYS: i64 = 1095;

/// Builds [`RecordList`]s of fake records through the context's ports.
pub struct RecordGenerator<'a> {
    ctx: &'a ServiceContext,
    window: Duration,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a generator stamping records within `window` before now.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, window: Duration) -> Self {
        Self { ctx, window }
    }

    /// Generates `count` records and appends them in generation order.
    ///
    /// The clock is read once, so every timestamp falls in the same
    /// `now - window ..= now` range. A window reaching past the earliest
    /// representable instant is clamped to it.
    #[must_use]
    pub fn generate(&self, count: usize) -> RecordList {
        let now = self.ctx.clock.now().trunc_subsecs(0);
        let start = now.checked_sub_signed(self.window).unwrap_or(DateTime::<Utc>::MIN_UTC);
        info!(count, window_days = self.window.num_days(), "generating records");

        let mut list = RecordList::new();
        for _ in 0..count {
            let id = self.ctx.id_gen.generate_id();
            let name = self.ctx.names.generate_name();
            let timestamp = self.ctx.sampler.sample_between(start, now);
            list.append(Record::new(id, name, timestamp));
        }
        list
    }
}
