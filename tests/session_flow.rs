//! End-to-end sessions driven through the public API.
//!
//! Each test plays the runtime's role: events go through `handle_event`, every
//! `PostToWorker` action is executed synchronously by a `ConnectionsWorker`, and
//! the response is fed back as `Event::WorkerResponse`.

use connections::domain::error::Result;
use connections::search::FuzzySearch;
use connections::source::{ConnectionSource, InMemorySource, JsonFileSource};
use connections::ui::viewmodel::{EmptyState, ErrorBanner};
use connections::worker::{ConnectionsWorker, WorkerMessage, WorkerResponse};
use connections::{
    handle_event, initialize, Action, AppState, Config, ConnectionRecord, ConnectionsError, Event,
    ViewMode,
};
use proptest::prelude::*;
use std::io::Write;

fn people(count: usize) -> Vec<ConnectionRecord> {
    (0..count)
        .map(|i| {
            ConnectionRecord::new(
                format!("Person {i}"),
                format!("555-{i:04}"),
                format!("p{i}@example.com"),
                "Lisbon, Portugal",
                "",
            )
        })
        .collect()
}

fn worker_over(source: impl ConnectionSource + 'static) -> ConnectionsWorker {
    ConnectionsWorker::new(Box::new(source), Box::new(FuzzySearch::new()))
}

/// Sends `event`, then runs every resulting action to completion.
fn dispatch(state: &mut AppState, worker: &mut ConnectionsWorker, event: Event) {
    let (_, actions) = handle_event(state, &event).unwrap();
    for Action::PostToWorker(message) in actions {
        let response = worker.handle_message(message);
        dispatch(state, worker, Event::WorkerResponse(response));
    }
}

/// Sends `event` and returns the worker messages it produced without running them.
fn post(state: &mut AppState, event: Event) -> Vec<WorkerMessage> {
    let (_, actions) = handle_event(state, &event).unwrap();
    actions
        .into_iter()
        .map(|Action::PostToWorker(message)| message)
        .collect()
}

/// Fails the first `failures` fetches, then delegates to an in-memory source.
struct FlakySource {
    inner: InMemorySource,
    failures: usize,
}

impl ConnectionSource for FlakySource {
    fn fetch_page(&mut self, offset: usize, size: usize) -> Result<Vec<ConnectionRecord>> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(ConnectionsError::Source("network error".to_string()));
        }
        self.inner.fetch_page(offset, size)
    }
}

#[test]
fn mount_shows_skeleton_until_first_page_arrives() {
    let mut state = initialize(&Config::default());
    let mut worker = worker_over(InMemorySource::new(people(120)));

    let messages = post(&mut state, Event::Mount);
    let vm = state.compute_viewmodel();
    assert!(vm.show_skeleton);
    assert_eq!(vm.skeleton_count, 10);
    assert!(vm.list_data.is_empty());
    assert_eq!(vm.empty_state, None);

    for message in messages {
        let response = worker.handle_message(message);
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    }

    let vm = state.compute_viewmodel();
    assert!(!vm.show_skeleton);
    assert_eq!(vm.skeleton_count, 0);
    assert_eq!(vm.list_data.len(), 50);
    assert_eq!(vm.tail_placeholder_count, 5);
    assert_eq!(vm.mode, ViewMode::Browsing);
}

#[test]
fn scrolling_appends_pages_in_order() {
    let mut state = initialize(&Config::default());
    let mut worker = worker_over(InMemorySource::new(people(120)));

    dispatch(&mut state, &mut worker, Event::Mount);
    dispatch(&mut state, &mut worker, Event::EndReached);
    dispatch(&mut state, &mut worker, Event::EndReached);

    let vm = state.compute_viewmodel();
    assert_eq!(vm.list_data, people(120));
}

#[test]
fn end_reached_while_loading_issues_no_second_fetch() {
    let mut state = initialize(&Config::default());

    let first = post(&mut state, Event::Mount);
    let second = post(&mut state, Event::EndReached);

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn failed_fetch_is_retryable_and_recovers() {
    let mut state = initialize(&Config::default());
    let mut worker = worker_over(FlakySource {
        inner: InMemorySource::new(people(3)),
        failures: 1,
    });

    dispatch(&mut state, &mut worker, Event::Mount);
    let vm = state.compute_viewmodel();
    assert_eq!(
        vm.error,
        Some(ErrorBanner {
            message: "network error".to_string(),
            retryable: true,
        })
    );
    assert!(vm.list_data.is_empty());
    assert_eq!(vm.empty_state, None);

    dispatch(&mut state, &mut worker, Event::RetryFetch);
    let vm = state.compute_viewmodel();
    assert_eq!(vm.error, None);
    assert_eq!(vm.list_data.len(), 3);
}

#[test]
fn search_overlays_and_clear_restores_base_list() {
    let records = vec![
        ConnectionRecord::new("Alice Martin", "555-0101", "a@x", "Lyon, France", ""),
        ConnectionRecord::new("Bob Stone", "555-0202", "b@x", "Oslo, Norway", ""),
    ];
    let mut state = initialize(&Config::default());
    let mut worker = worker_over(InMemorySource::new(records.clone()));

    dispatch(&mut state, &mut worker, Event::Mount);
    dispatch(&mut state, &mut worker, Event::SearchSubmit("alice".to_string()));

    let vm = state.compute_viewmodel();
    assert_eq!(vm.mode, ViewMode::Searching);
    assert_eq!(vm.list_data, vec![records[0].clone()]);
    assert_eq!(vm.tail_placeholder_count, 0);

    dispatch(&mut state, &mut worker, Event::SearchClear);
    let vm = state.compute_viewmodel();
    assert_eq!(vm.mode, ViewMode::Browsing);
    assert_eq!(vm.list_data, records);
}

#[test]
fn search_without_matches_shows_no_results() {
    let mut state = initialize(&Config::default());
    let mut worker = worker_over(InMemorySource::new(people(5)));

    dispatch(&mut state, &mut worker, Event::Mount);
    dispatch(&mut state, &mut worker, Event::SearchSubmit("zzzz".to_string()));

    let vm = state.compute_viewmodel();
    assert!(vm.list_data.is_empty());
    assert_eq!(vm.empty_state, Some(EmptyState::NoResults));
}

#[test]
fn superseded_search_response_is_ignored() {
    let records = vec![
        ConnectionRecord::new("Alice Martin", "555-0101", "a@x", "Lyon, France", ""),
        ConnectionRecord::new("Bob Stone", "555-0202", "b@x", "Oslo, Norway", ""),
    ];
    let mut state = initialize(&Config::default());
    let mut worker = worker_over(InMemorySource::new(records.clone()));
    dispatch(&mut state, &mut worker, Event::Mount);

    let stale = post(&mut state, Event::SearchSubmit("alice".to_string()));
    let fresh = post(&mut state, Event::SearchSubmit("bob".to_string()));

    let fresh_response = worker.handle_message(fresh.into_iter().next().unwrap());
    handle_event(&mut state, &Event::WorkerResponse(fresh_response)).unwrap();

    let stale_response = worker.handle_message(stale.into_iter().next().unwrap());
    let (changed, _) = handle_event(&mut state, &Event::WorkerResponse(stale_response)).unwrap();

    assert!(!changed);
    assert_eq!(state.compute_viewmodel().list_data, vec![records[1].clone()]);
}

#[test]
fn search_failure_is_not_retryable_and_clear_dismisses_it() {
    let mut state = initialize(&Config::default());
    let mut worker = worker_over(InMemorySource::new(people(2)));
    dispatch(&mut state, &mut worker, Event::Mount);

    post(&mut state, Event::SearchSubmit("person".to_string()));
    let generation = state.search.generation();
    handle_event(
        &mut state,
        &Event::WorkerResponse(WorkerResponse::SearchFailed {
            generation,
            message: "timeout".to_string(),
        }),
    )
    .unwrap();

    let vm = state.compute_viewmodel();
    assert_eq!(
        vm.error,
        Some(ErrorBanner {
            message: "timeout".to_string(),
            retryable: false,
        })
    );

    dispatch(&mut state, &mut worker, Event::SearchClear);
    let vm = state.compute_viewmodel();
    assert_eq!(vm.error, None);
    assert_eq!(vm.mode, ViewMode::Browsing);
    assert_eq!(vm.list_data.len(), 2);
}

#[test]
fn json_file_session_deduplicates_and_pages() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"results": [
            {{"name": "Alice", "cell": "1", "email": "a@x", "location": "Lyon", "thumbnail": ""}},
            {{"name": "Alice again", "cell": "2", "email": "a@x", "location": "Lyon", "thumbnail": ""}},
            {{"name": "Bob", "cell": "3", "email": "b@x", "location": "Oslo", "thumbnail": ""}}
        ]}}"#
    )
    .unwrap();

    let config = Config::from_toml_str("page_size = 1").unwrap();
    let mut state = initialize(&config);
    let mut worker = worker_over(JsonFileSource::new(file.path().to_path_buf()).unwrap());

    dispatch(&mut state, &mut worker, Event::Mount);
    dispatch(&mut state, &mut worker, Event::EndReached);

    let names: Vec<String> = state
        .compute_viewmodel()
        .list_data
        .into_iter()
        .map(|record| record.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn empty_source_shows_no_connections() {
    let mut state = initialize(&Config::default());
    let mut worker = worker_over(InMemorySource::default());

    dispatch(&mut state, &mut worker, Event::Mount);

    let vm = state.compute_viewmodel();
    assert!(!vm.show_skeleton);
    assert_eq!(vm.tail_placeholder_count, 0);
    assert_eq!(vm.empty_state, Some(EmptyState::NoConnections));
}

proptest! {
    #[test]
    fn store_accumulates_pages_in_arrival_order(
        total in 0usize..200,
        page_size in 1usize..40,
        scrolls in 0usize..10,
    ) {
        let config = Config::from_toml_str(&format!("page_size = {page_size}")).unwrap();
        let mut state = initialize(&config);
        let mut worker = worker_over(InMemorySource::new(people(total)));

        dispatch(&mut state, &mut worker, Event::Mount);
        for _ in 0..scrolls {
            dispatch(&mut state, &mut worker, Event::EndReached);
        }

        let expected_len = total.min((scrolls + 1) * page_size);
        prop_assert_eq!(state.store.len(), expected_len);
        prop_assert_eq!(state.store.records(), &people(total)[..expected_len]);
    }
}
