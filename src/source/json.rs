//! JSON file-based fetch source.
//!
//! Loads a list of connections from a JSON file once and serves it page by page.
//! Two layouts are accepted:
//!
//! ```json
//! [ { "name": "...", "cell": "...", "email": "...", "location": "...", "thumbnail": "..." } ]
//! ```
//!
//! or the same array wrapped in a `results` field, as returned by typical
//! people-listing APIs:
//!
//! ```json
//! { "results": [ { "name": "...", "email": "...", ... } ] }
//! ```
//!
//! Records sharing an email with an earlier record are dropped at load time, so
//! pages served from this source never contain duplicate keys.

use crate::domain::error::{ConnectionsError, Result};
use crate::domain::ConnectionRecord;
use crate::source::backend::ConnectionSource;
use crate::source::memory::page_of;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// On-disk layouts accepted by [`JsonFileSource`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceFile {
    List(Vec<ConnectionRecord>),
    Wrapped { results: Vec<ConnectionRecord> },
}

impl SourceFile {
    fn into_records(self) -> Vec<ConnectionRecord> {
        match self {
            Self::List(records) | Self::Wrapped { results: records } => records,
        }
    }
}

/// Fetch source backed by a JSON file.
#[derive(Debug)]
pub struct JsonFileSource {
    /// Path the records were loaded from.
    file_path: PathBuf,

    /// Deduplicated records in file order.
    records: Vec<ConnectionRecord>,
}

impl JsonFileSource {
    /// Loads every record from `file_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not a JSON array of records or a `results` wrapper
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use connections::source::JsonFileSource;
    /// use std::path::PathBuf;
    ///
    /// let source = JsonFileSource::new(PathBuf::from("connections.json"))?;
    /// println!("{} connections available", source.len());
    /// # Ok::<(), connections::ConnectionsError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        let _span = tracing::debug_span!("json_source_load", path = ?file_path).entered();

        let records = Self::load_from_file(&file_path)?;

        tracing::debug!(record_count = records.len(), "json source loaded");

        Ok(Self { file_path, records })
    }

    fn load_from_file(path: &Path) -> Result<Vec<ConnectionRecord>> {
        let contents = std::fs::read_to_string(path)?;
        let file: SourceFile = serde_json::from_str(&contents).map_err(|e| {
            ConnectionsError::Source(format!("failed to parse {}: {e}", path.display()))
        })?;

        let mut seen = HashSet::new();
        let mut records = file.into_records();
        let before = records.len();
        records.retain(|record| seen.insert(record.email.clone()));

        if records.len() < before {
            tracing::warn!(
                dropped = before - records.len(),
                "dropped records with duplicate emails"
            );
        }

        Ok(records)
    }

    /// Path the records were loaded from.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
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

impl ConnectionSource for JsonFileSource {
    fn fetch_page(&mut self, offset: usize, size: usize) -> Result<Vec<ConnectionRecord>> {
        let _span = tracing::debug_span!("json_fetch_page", offset = offset, size = size).entered();

        let page = page_of(&self.records, offset, size);

        tracing::debug!(returned = page.len(), "page served");
        Ok(page)
    }
}
