//! Worker executing fetch and search requests against the collaborators.
//!
//! The worker is the only place where collaborator calls happen. It turns each
//! [`WorkerMessage`] into exactly one [`WorkerResponse`], echoing the request's
//! tag, and converts collaborator errors into failure responses so that nothing
//! unwinds into the application layer.

use crate::domain::error::Result;
use crate::domain::ConnectionRecord;
use crate::search::SearchEngine;
use crate::source::ConnectionSource;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Owns the fetch and search collaborators and answers worker messages.
pub struct ConnectionsWorker {
    source: Box<dyn ConnectionSource>,
    engine: Box<dyn SearchEngine>,
}

impl ConnectionsWorker {
    /// Creates a worker over the given collaborators.
    ///
    /// # Example
    ///
    /// ```rust
    /// use connections::search::FuzzySearch;
    /// use connections::source::InMemorySource;
    /// use connections::worker::{ConnectionsWorker, WorkerMessage, WorkerResponse};
    ///
    /// let mut worker = ConnectionsWorker::new(
    ///     Box::new(InMemorySource::new(vec![])),
    ///     Box::new(FuzzySearch::new()),
    /// );
    /// let response = worker.handle_message(WorkerMessage::fetch_page(1, 0, 50));
    /// assert_eq!(response, WorkerResponse::PageFetched { request_id: 1, records: vec![] });
    /// ```
    #[must_use]
    pub fn new(source: Box<dyn ConnectionSource>, engine: Box<dyn SearchEngine>) -> Self {
        Self { source, engine }
    }

    /// Helper for handling collaborator results with consistent logging.
    fn handle_result<F, G>(operation: &str, result: Result<Vec<ConnectionRecord>>, on_success: F, on_error: G) -> WorkerResponse
    where
        F: FnOnce(Vec<ConnectionRecord>) -> WorkerResponse,
        G: FnOnce(String) -> WorkerResponse,
    {
        match result {
            Ok(records) => {
                tracing::debug!(operation = operation, record_count = records.len(), "collaborator call successful");
                on_success(records)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "collaborator call failed");
                on_error(e.to_string())
            }
        }
    }

    fn handle_fetch_page(&mut self, request_id: u64, offset: usize, size: usize) -> WorkerResponse {
        Self::handle_result(
            "fetch page",
            self.source.fetch_page(offset, size),
            |records| WorkerResponse::PageFetched { request_id, records },
            |message| WorkerResponse::PageFailed { request_id, message },
        )
    }

    fn handle_search(&mut self, generation: u64, query: &str, corpus: &[ConnectionRecord]) -> WorkerResponse {
        Self::handle_result(
            "search",
            self.engine.search(query, corpus),
            |results| WorkerResponse::SearchCompleted { generation, results },
            |message| WorkerResponse::SearchFailed { generation, message },
        )
    }

    /// Processes a worker message and returns the matching response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::FetchPage {
                request_id,
                offset,
                size,
            } => self.handle_fetch_page(request_id, offset, size),

            WorkerMessage::Search {
                generation,
                query,
                corpus,
            } => self.handle_search(generation, &query, &corpus),
        }
    }
}

impl std::fmt::Debug for ConnectionsWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionsWorker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionsError;
    use crate::search::FuzzySearch;
    use crate::source::InMemorySource;

    struct FailingSource;

    impl ConnectionSource for FailingSource {
        fn fetch_page(&mut self, _offset: usize, _size: usize) -> Result<Vec<ConnectionRecord>> {
            Err(ConnectionsError::Source("network error".to_string()))
        }
    }

    struct FailingEngine;

    impl SearchEngine for FailingEngine {
        fn search(&mut self, _query: &str, _corpus: &[ConnectionRecord]) -> Result<Vec<ConnectionRecord>> {
            Err(ConnectionsError::Search("timeout".to_string()))
        }
    }

    fn records() -> Vec<ConnectionRecord> {
        vec![
            ConnectionRecord::new("Alice", "", "a@x", "", ""),
            ConnectionRecord::new("Bob", "", "b@x", "", ""),
        ]
    }

    #[test]
    fn fetch_echoes_request_id() {
        let mut worker = ConnectionsWorker::new(
            Box::new(InMemorySource::new(records())),
            Box::new(FuzzySearch::new()),
        );

        let response = worker.handle_message(WorkerMessage::fetch_page(7, 1, 10));
        assert_eq!(
            response,
            WorkerResponse::PageFetched {
                request_id: 7,
                records: vec![records()[1].clone()],
            }
        );
    }

    #[test]
    fn source_error_becomes_page_failed_with_plain_message() {
        let mut worker = ConnectionsWorker::new(Box::new(FailingSource), Box::new(FuzzySearch::new()));

        let response = worker.handle_message(WorkerMessage::fetch_page(2, 0, 10));
        assert_eq!(
            response,
            WorkerResponse::PageFailed {
                request_id: 2,
                message: "network error".to_string(),
            }
        );
    }

    #[test]
    fn search_runs_over_message_corpus() {
        let mut worker = ConnectionsWorker::new(
            Box::new(InMemorySource::default()),
            Box::new(FuzzySearch::new()),
        );

        let response = worker.handle_message(WorkerMessage::search(4, "alice", records()));
        assert_eq!(
            response,
            WorkerResponse::SearchCompleted {
                generation: 4,
                results: vec![records()[0].clone()],
            }
        );
    }

    #[test]
    fn engine_error_becomes_search_failed() {
        let mut worker = ConnectionsWorker::new(Box::new(InMemorySource::default()), Box::new(FailingEngine));

        let response = worker.handle_message(WorkerMessage::search(9, "x", records()));
        assert_eq!(
            response,
            WorkerResponse::SearchFailed {
                generation: 9,
                message: "timeout".to_string(),
            }
        );
    }
}
