//! Search overlay holding ephemeral results on top of the base list.
//!
//! The overlay is independent of pagination: submitting or clearing a search
//! never touches the record store or the page cursor. Every submission and every
//! clear bumps a generation counter; only a response carrying the current
//! generation is applied, so a slow earlier search cannot overwrite a later one
//! and a search resolving after `clear()` cannot bring the overlay back.

use super::modes::{FetchStatus, ViewMode};
use crate::domain::ConnectionRecord;
use crate::worker::WorkerMessage;

/// Search state: active query, results and status.
#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    query: Option<String>,
    results: Vec<ConnectionRecord>,
    status: FetchStatus,
    generation: u64,
}

impl SearchOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `Searching` from submission until `clear()`, `Browsing` otherwise.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        if self.query.is_some() {
            ViewMode::Searching
        } else {
            ViewMode::Browsing
        }
    }

    #[must_use]
    pub const fn status(&self) -> &FetchStatus {
        &self.status
    }

    #[must_use]
    pub fn results(&self) -> &[ConnectionRecord] {
        &self.results
    }

    /// The query of the active search, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Activates the overlay and builds the search request.
    ///
    /// The mode switches to `Searching` before any result arrives. Results of a
    /// previous submission are discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use connections::app::search::SearchOverlay;
    /// use connections::app::modes::ViewMode;
    ///
    /// let mut overlay = SearchOverlay::new();
    /// let _message = overlay.submit("alice", vec![]);
    /// assert_eq!(overlay.view_mode(), ViewMode::Searching);
    /// assert!(overlay.status().is_loading());
    /// ```
    pub fn submit(&mut self, query: &str, corpus: Vec<ConnectionRecord>) -> WorkerMessage {
        self.generation += 1;
        self.query = Some(query.to_string());
        self.results.clear();
        self.status = FetchStatus::Loading;

        tracing::debug!(
            generation = self.generation,
            query = %query,
            corpus_len = corpus.len(),
            "search submitted"
        );

        WorkerMessage::search(self.generation, query, corpus)
    }

    /// Applies the outcome of a search.
    ///
    /// Returns `false` and changes nothing when the response belongs to a
    /// superseded generation or arrives after `clear()`.
    pub fn resolve(&mut self, generation: u64, outcome: Result<Vec<ConnectionRecord>, String>) -> bool {
        if generation != self.generation || self.query.is_none() {
            tracing::warn!(
                generation = generation,
                current_generation = self.generation,
                active = self.query.is_some(),
                "dropping superseded search response"
            );
            return false;
        }

        match outcome {
            Ok(results) => {
                tracing::debug!(generation = generation, result_count = results.len(), "search completed");
                self.results = results;
                self.status = FetchStatus::Idle;
            }
            Err(message) => {
                tracing::debug!(generation = generation, error = %message, "search failed");
                self.results.clear();
                self.status = FetchStatus::Error(message);
            }
        }

        true
    }

    /// Deactivates the overlay, discarding results and status.
    ///
    /// Any search still in flight becomes stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.query = None;
        self.results.clear();
        self.status = FetchStatus::Idle;
        tracing::debug!(generation = self.generation, "search cleared");
    }
}
