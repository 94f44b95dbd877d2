//! Event handling and state transition logic.
//!
//! This module implements the handler that processes presentation events and
//! worker responses, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the presentation layer or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via the store, pagination and search components
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`
//! - **List**: `EndReached`, `RetryFetch`
//! - **Search**: `SearchSubmit`, `SearchClear`
//! - **Worker**: `WorkerResponse` with typed response variants
//!
//! # Example
//!
//! ```rust
//! use connections::{handle_event, AppState, Config, Event};
//!
//! let mut state = AppState::new(&Config::default());
//! let (needs_render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(needs_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), connections::ConnectionsError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::WorkerResponse;

/// Events emitted by the presentation layer or delivered by the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The list screen was mounted. Issues the initial page fetch; a second
    /// mount starts a fresh session.
    Mount,

    /// The user scrolled to the end of the visible list.
    EndReached,

    /// The user pressed the retry handler of a base-fetch error.
    RetryFetch,

    /// The user submitted a search query.
    SearchSubmit(String),

    /// The user cleared the search field.
    SearchClear,

    /// Wraps a response from the worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates state, and returns actions to execute.
///
/// # Returns
///
/// `(needs_render, actions)`: whether the view model may have changed, and the
/// side effects to run in order.
///
/// # Errors
///
/// Reserved for failures of the state machine itself; collaborator failures are
/// represented as states and never surface here.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mount => {
            state.mounts += 1;
            if state.mounts > 1 {
                tracing::debug!(mounts = state.mounts, "remount, discarding session state");
                state.reset();
            }
            Ok((true, request_next_page(state)))
        }
        Event::EndReached => {
            if state.view_mode().is_searching() {
                tracing::debug!("end reached while searching, ignoring");
                return Ok((false, vec![]));
            }
            let actions = request_next_page(state);
            Ok((!actions.is_empty(), actions))
        }
        Event::RetryFetch => {
            tracing::debug!(error = ?state.base_status().error(), "retrying page fetch");
            let actions = request_next_page(state);
            Ok((!actions.is_empty(), actions))
        }
        Event::SearchSubmit(query) => {
            let query = query.trim();
            if query.is_empty() {
                tracing::debug!("blank search query, clearing search");
                state.search.clear();
                return Ok((true, vec![]));
            }

            let corpus = state.store.snapshot();
            let message = state.search.submit(query, corpus);
            Ok((true, vec![Action::PostToWorker(message)]))
        }
        Event::SearchClear => {
            let was_active = state.view_mode().is_searching();
            state.search.clear();
            Ok((was_active, vec![]))
        }
        Event::WorkerResponse(response) => {
            let applied = match response {
                WorkerResponse::PageFetched { request_id, records } => state.pagination.resolve(
                    *request_id,
                    Ok(records.clone()),
                    &mut state.store,
                ),
                WorkerResponse::PageFailed { request_id, message } => state.pagination.resolve(
                    *request_id,
                    Err(message.clone()),
                    &mut state.store,
                ),
                WorkerResponse::SearchCompleted { generation, results } => {
                    state.search.resolve(*generation, Ok(results.clone()))
                }
                WorkerResponse::SearchFailed { generation, message } => {
                    state.search.resolve(*generation, Err(message.clone()))
                }
            };
            Ok((applied, vec![]))
        }
    }
}

fn request_next_page(state: &mut AppState) -> Vec<Action> {
    state
        .pagination
        .request_next_page(state.page_size)
        .map(Action::PostToWorker)
        .into_iter()
        .collect()
}
