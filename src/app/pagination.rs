//! Pagination controller driving "fetch next page" requests.
//!
//! The controller owns the page cursor as an offset counter: the number of
//! records successfully appended to the store so far. Each request is tagged
//! with a monotonically increasing `request_id`, and at most one request is in
//! flight at any time.
//!
//! # Transitions
//!
//! ```text
//! Idle ──request──▶ Loading ──ok──▶ Idle   (records appended, offset advanced)
//! Error ─request──▶ Loading ──err─▶ Error  (store and offset untouched)
//! ```
//!
//! Requests made while `Loading` are dropped, not queued.

use super::modes::FetchStatus;
use super::store::RecordStore;
use crate::domain::ConnectionRecord;
use crate::worker::WorkerMessage;
use std::num::NonZeroUsize;

/// The page request currently awaiting a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageRequest {
    request_id: u64,
    offset: usize,
    size: usize,
}

/// Tracks in-flight state and the page cursor for the base list.
#[derive(Debug, Clone, Default)]
pub struct PaginationController {
    status: FetchStatus,
    offset: usize,
    next_request_id: u64,
    in_flight: Option<PageRequest>,
}

impl PaginationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status of the base pagination.
    #[must_use]
    pub const fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Number of records fetched so far; the boundary of the next page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Issues a fetch for up to `page_size` records after the last page.
    ///
    /// Returns `None` without side effects while a fetch is already in flight.
    /// After a failure the same page boundary is requested again.
    ///
    /// # Example
    ///
    /// ```rust
    /// use connections::app::pagination::PaginationController;
    /// use std::num::NonZeroUsize;
    ///
    /// let mut pagination = PaginationController::new();
    /// let size = NonZeroUsize::new(50).unwrap();
    /// assert!(pagination.request_next_page(size).is_some());
    /// assert!(pagination.request_next_page(size).is_none());
    /// ```
    pub fn request_next_page(&mut self, page_size: NonZeroUsize) -> Option<WorkerMessage> {
        if self.status.is_loading() {
            tracing::debug!(offset = self.offset, "page fetch already in flight, ignoring request");
            return None;
        }

        self.next_request_id += 1;
        let request = PageRequest {
            request_id: self.next_request_id,
            offset: self.offset,
            size: page_size.get(),
        };

        self.in_flight = Some(request);
        self.status = FetchStatus::Loading;

        tracing::debug!(
            request_id = request.request_id,
            offset = request.offset,
            size = request.size,
            "requesting next page"
        );

        Some(WorkerMessage::fetch_page(
            request.request_id,
            request.offset,
            request.size,
        ))
    }

    /// Applies the outcome of a page fetch.
    ///
    /// Returns `false` and changes nothing when `request_id` does not match the
    /// request in flight.
    pub fn resolve(
        &mut self,
        request_id: u64,
        outcome: Result<Vec<ConnectionRecord>, String>,
        store: &mut RecordStore,
    ) -> bool {
        let Some(request) = self.in_flight.filter(|r| r.request_id == request_id) else {
            tracing::warn!(
                request_id = request_id,
                in_flight = ?self.in_flight.map(|r| r.request_id),
                "dropping page response that matches no in-flight request"
            );
            return false;
        };

        self.in_flight = None;

        match outcome {
            Ok(records) => {
                let received = records.len();
                if received > request.size {
                    tracing::warn!(
                        received = received,
                        requested = request.size,
                        "source returned more records than requested"
                    );
                }
                store.append(records);
                self.offset += received;
                self.status = FetchStatus::Idle;
                tracing::debug!(request_id = request_id, received = received, offset = self.offset, "page fetched");
            }
            Err(message) => {
                tracing::debug!(request_id = request_id, error = %message, "page fetch failed");
                self.status = FetchStatus::Error(message);
            }
        }

        true
    }

    /// Forgets the cursor and any in-flight request.
    ///
    /// The request counter keeps increasing, so a response addressed to a
    /// request issued before the reset can never match a later one.
    pub fn reset(&mut self) {
        self.status = FetchStatus::Idle;
        self.offset = 0;
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn page(prefix: &str, n: usize) -> Vec<ConnectionRecord> {
        (0..n)
            .map(|i| {
                let email = format!("{prefix}{i}@x");
                ConnectionRecord::new(&email, "", &email, "", "")
            })
            .collect()
    }

    fn request_id(message: &WorkerMessage) -> u64 {
        match message {
            WorkerMessage::FetchPage { request_id, .. } => *request_id,
            WorkerMessage::Search { .. } => panic!("expected a page fetch"),
        }
    }

    #[test]
    fn second_request_while_loading_is_ignored() {
        let mut pagination = PaginationController::new();

        let first = pagination.request_next_page(size(50));
        let second = pagination.request_next_page(size(50));

        assert!(first.is_some());
        assert!(second.is_none());
        assert!(pagination.status().is_loading());
    }

    #[test]
    fn success_appends_and_advances_offset() {
        let mut pagination = PaginationController::new();
        let mut store = RecordStore::new();

        let message = pagination.request_next_page(size(2)).unwrap();
        assert_eq!(message, WorkerMessage::fetch_page(1, 0, 2));

        assert!(pagination.resolve(1, Ok(page("a", 2)), &mut store));
        assert_eq!(store.len(), 2);
        assert_eq!(pagination.offset(), 2);
        assert_eq!(pagination.status(), &FetchStatus::Idle);

        let next = pagination.request_next_page(size(2)).unwrap();
        assert_eq!(next, WorkerMessage::fetch_page(2, 2, 2));
    }

    #[test]
    fn failure_keeps_store_and_page_boundary() {
        let mut pagination = PaginationController::new();
        let mut store = RecordStore::new();

        let first = pagination.request_next_page(size(10)).unwrap();
        pagination.resolve(request_id(&first), Ok(page("a", 10)), &mut store);

        let second = pagination.request_next_page(size(10)).unwrap();
        pagination.resolve(request_id(&second), Err("network error".to_string()), &mut store);

        assert_eq!(store.len(), 10);
        assert_eq!(pagination.status().error(), Some("network error"));

        let retry = pagination.request_next_page(size(10)).unwrap();
        assert!(matches!(retry, WorkerMessage::FetchPage { offset: 10, .. }));
    }

    #[test]
    fn unknown_request_id_is_dropped() {
        let mut pagination = PaginationController::new();
        let mut store = RecordStore::new();

        let message = pagination.request_next_page(size(5)).unwrap();
        let stale = request_id(&message) + 7;

        assert!(!pagination.resolve(stale, Ok(page("a", 5)), &mut store));
        assert!(store.is_empty());
        assert!(pagination.status().is_loading());
    }

    #[test]
    fn response_after_reset_is_dropped() {
        let mut pagination = PaginationController::new();
        let mut store = RecordStore::new();

        let before = pagination.request_next_page(size(5)).unwrap();
        pagination.reset();
        let after = pagination.request_next_page(size(5)).unwrap();

        assert!(!pagination.resolve(request_id(&before), Ok(page("old", 5)), &mut store));
        assert!(pagination.resolve(request_id(&after), Ok(page("new", 5)), &mut store));
        assert_eq!(store.records()[0].email, "new0@x");
    }

    #[test]
    fn short_page_advances_by_received_count() {
        let mut pagination = PaginationController::new();
        let mut store = RecordStore::new();

        let message = pagination.request_next_page(size(50)).unwrap();
        pagination.resolve(request_id(&message), Ok(page("a", 3)), &mut store);

        assert_eq!(pagination.offset(), 3);
    }
}
