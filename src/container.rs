//! Ordered record container.
//!
//! Records are kept in append order until a sort replaces that order.
//! Search is a linear scan; sorting materializes the records, applies a
//! stable sort, and rebuilds the backing sequence from the result.

use std::cmp::Reverse;

use tracing::debug;

use crate::record::Record;

/// Append-ordered sequence of [`Record`]s.
///
/// No duplicate-id checks are made and nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordList {
    records: Vec<Record>,
}

impl RecordList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the records in current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns every record whose name equals `query`, ignoring case.
    ///
    /// Only whole-name matches count; `"ali"` never matches `"Alice"`.
    /// Matches come back in current list order. An empty result is not
    /// an error.
    #[must_use]
    pub fn search_by_name(&self, query: &str) -> Vec<Record> {
        let needle = query.to_lowercase();
        let hits: Vec<Record> =
            self.records.iter().filter(|r| r.name().to_lowercase() == needle).cloned().collect();
        debug!(query, hits = hits.len(), "searched records by name");
        hits
    }

    /// Snapshot of all records in current order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Reorders the list by timestamp and returns the new order.
    ///
    /// `ascending` puts the earliest record first, otherwise the latest.
    /// Records with equal timestamps keep their previous relative order in
    /// both directions.
    pub fn sort_by_timestamp(&mut self, ascending: bool) -> Vec<Record> {
        let mut sorted = self.to_vec();
        if ascending {
            sorted.sort_by_key(Record::timestamp);
        } else {
            sorted.sort_by_key(|r| Reverse(r.timestamp()));
        }
        debug!(ascending, count = sorted.len(), "sorted records by timestamp");

        self.records = Vec::with_capacity(sorted.len());
        self.extend(sorted.iter().cloned());
        sorted
    }
}

impl FromIterator<Record> for RecordList {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<Record> for RecordList {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.append(record);
        }
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
