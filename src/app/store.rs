//! Append-only record store holding the paginated base list.
//!
//! Pages are concatenated in fetch order. The store never reorders or
//! deduplicates; duplicate suppression is the fetch source's job. When a page
//! introduces an email that is already present, the store keeps the record and
//! logs a warning so a misbehaving source is visible in the trace output.

use crate::domain::ConnectionRecord;
use std::collections::HashSet;

/// Ordered, append-only sequence of fetched connections.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ConnectionRecord>,
    emails: HashSet<String>,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page of records to the tail, preserving arrival order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use connections::app::store::RecordStore;
    /// use connections::ConnectionRecord;
    ///
    /// let mut store = RecordStore::new();
    /// store.append(vec![ConnectionRecord::new("Ada", "", "ada@x", "", "")]);
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn append(&mut self, records: Vec<ConnectionRecord>) {
        let incoming = records.len();
        let mut duplicates = 0usize;

        for record in &records {
            if !self.emails.insert(record.email.clone()) {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            tracing::warn!(
                duplicates = duplicates,
                "page contains emails already present in the store"
            );
        }

        self.records.extend(records);

        tracing::debug!(
            appended = incoming,
            total = self.records.len(),
            "records appended to store"
        );
    }

    /// Returns a copy of the current sequence.
    ///
    /// The copy is independent of later appends.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ConnectionRecord> {
        self.records.clone()
    }

    /// Borrows the current sequence.
    #[must_use]
    pub fn records(&self) -> &[ConnectionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discards every record. Only used when the screen is remounted.
    pub fn clear(&mut self) {
        self.records.clear();
        self.emails.clear();
    }
}
