//! In-memory fetch source.

use crate::domain::error::Result;
use crate::domain::ConnectionRecord;
use crate::source::backend::ConnectionSource;

/// Serves pages out of a `Vec` held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<ConnectionRecord>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(records: Vec<ConnectionRecord>) -> Self {
        Self { records }
    }

    /// Total number of records the source can deliver.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ConnectionSource for InMemorySource {
    fn fetch_page(&mut self, offset: usize, size: usize) -> Result<Vec<ConnectionRecord>> {
        Ok(page_of(&self.records, offset, size))
    }
}

/// Copies the `[offset, offset + size)` window of `records`, clamped to bounds.
pub(crate) fn page_of(records: &[ConnectionRecord], offset: usize, size: usize) -> Vec<ConnectionRecord> {
    let start = offset.min(records.len());
    let end = offset.saturating_add(size).min(records.len());
    records[start..end].to_vec()
}
