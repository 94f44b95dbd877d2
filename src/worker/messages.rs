//! Worker message types for the fetch and search protocol.
//!
//! This module defines the request and response protocol between the application
//! layer and the worker that talks to the fetch and search collaborators. Every
//! request carries a tag (`request_id` for pages, `generation` for searches) that
//! the matching response echoes back, which lets the application layer drop
//! responses that no longer apply.
//!
//! Both enums derive serde so they can cross a thread or process boundary as JSON.

use crate::domain::ConnectionRecord;
use serde::{Deserialize, Serialize};

/// Messages sent from the application layer to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch up to `size` records starting at `offset`.
    FetchPage {
        /// Tag echoed back in the response.
        request_id: u64,

        /// Number of records already fetched, i.e. the page boundary.
        offset: usize,

        /// Maximum number of records to return.
        size: usize,
    },

    /// Run a search over a snapshot of the record store.
    Search {
        /// Tag echoed back in the response.
        generation: u64,

        /// Query as submitted by the user.
        query: String,

        /// Records paginated so far, at submission time.
        corpus: Vec<ConnectionRecord>,
    },
}

impl WorkerMessage {
    /// Creates a `FetchPage` message.
    #[must_use]
    pub const fn fetch_page(request_id: u64, offset: usize, size: usize) -> Self {
        Self::FetchPage {
            request_id,
            offset,
            size,
        }
    }

    /// Creates a `Search` message.
    #[must_use]
    pub fn search(generation: u64, query: impl Into<String>, corpus: Vec<ConnectionRecord>) -> Self {
        Self::Search {
            generation,
            query: query.into(),
            corpus,
        }
    }
}

/// Responses sent from the worker back to the application layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// A page was fetched.
    PageFetched {
        /// Tag of the originating `FetchPage`.
        request_id: u64,

        /// Records in source order.
        records: Vec<ConnectionRecord>,
    },

    /// A page fetch failed.
    PageFailed {
        /// Tag of the originating `FetchPage`.
        request_id: u64,

        /// Human-readable error message.
        message: String,
    },

    /// A search completed.
    SearchCompleted {
        /// Tag of the originating `Search`.
        generation: u64,

        /// Matching records in engine order.
        results: Vec<ConnectionRecord>,
    },

    /// A search failed.
    SearchFailed {
        /// Tag of the originating `Search`.
        generation: u64,

        /// Human-readable error message.
        message: String,
    },
}
