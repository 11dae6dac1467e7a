//! The tracked record type.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A single tracked object: an opaque id, a display name, and a timestamp.
///
/// Records are immutable once built. Timestamps carry whole seconds only;
/// any sub-second part is dropped by [`Record::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordFields")]
pub struct Record {
    id: String,
    name: String,
    timestamp: DateTime<Utc>,
}

impl Record {
    /// Builds a record, truncating `timestamp` to second precision.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self { id: id.into(), name: name.into(), timestamp: timestamp.trunc_subsecs(0) }
    }

    /// The record's unique token.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the record was stamped.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Wire shape of a [`Record`]; converted through [`Record::new`].
#[derive(Deserialize)]
struct RecordFields {
    id: String,
    name: String,
    timestamp: DateTime<Utc>,
}

impl From<RecordFields> for Record {
    fn from(fields: RecordFields) -> Self {
        Self::new(fields.id, fields.name, fields.timestamp)
    }
}
