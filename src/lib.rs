//! Connections: a paginated, searchable connection list coordinator.
//!
//! Connections sits between a paginated fetch source, a search service and a
//! list presentation layer. It provides:
//! - Incremental page loading with at-most-one-in-flight fetches
//! - A search overlay that supersedes stale responses by generation
//! - A pure resolver that turns state into a display-ready view model
//! - Bundled JSON-file and in-memory sources and a fuzzy search engine
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line-oriented runtime (main.rs)                    │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Record store, pagination, search overlay         │
//! │  - View model resolution                            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Worker Layer  │   │ Collaborators │
//! │ (ui/)         │   │ (worker/)     │   │ (source/,     │
//! │ - View model  │   │ - Messages    │   │  search/)     │
//! │ - Plain text  │   │ - Dispatch    │   │ - JSON, fuzzy │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Error types (domain/error)                       │
//! │  - Connection record (domain/connection)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (records, errors)
//! - [`source`]: Fetch collaborators (JSON file, in-memory)
//! - [`search`]: Search collaborators (fuzzy)
//! - [`worker`]: Executes actions against the collaborators
//! - [`ui`]: View model and plain-text rendering
//! - [`observability`]: `tracing` subscriber setup and rotating log file
//!
//! # Event Flow
//!
//! 1. The presentation layer emits an [`Event`] (`Mount`, `EndReached`,
//!    `SearchSubmit`, ...)
//! 2. [`handle_event`] mutates [`AppState`] and returns [`Action`]s
//! 3. The runtime hands each `Action::PostToWorker` message to the worker
//! 4. The worker answers with a response, fed back as `Event::WorkerResponse`
//! 5. When the handler reports a change, the runtime re-renders
//!    [`AppState::compute_viewmodel`]
//!
//! # Example
//!
//! ```rust
//! use connections::app::Action;
//! use connections::search::FuzzySearch;
//! use connections::source::InMemorySource;
//! use connections::worker::ConnectionsWorker;
//! use connections::{handle_event, initialize, Config, ConnectionRecord, Event};
//!
//! let records = vec![ConnectionRecord::new("Alice", "555-0101", "a@x", "Lyon", "")];
//! let mut worker = ConnectionsWorker::new(
//!     Box::new(InMemorySource::new(records)),
//!     Box::new(FuzzySearch::new()),
//! );
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! for Action::PostToWorker(message) in actions {
//!     let response = worker.handle_message(message);
//!     handle_event(&mut state, &Event::WorkerResponse(response))?;
//! }
//!
//! assert_eq!(state.compute_viewmodel().list_data.len(), 1);
//! # Ok::<(), connections::ConnectionsError>(())
//! ```

pub mod app;
pub mod domain;
pub mod search;
pub mod source;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FetchStatus, ViewMode};
pub use domain::{ConnectionRecord, ConnectionsError, Result};

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

/// Runtime configuration, loaded from TOML.
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// # Example
///
/// ```toml
/// page_size = 25
/// tail_placeholder_count = 3
/// skeleton_count = 8
/// data_file = "connections.json"
/// log_level = "debug"
/// log_file = "/tmp/connections.log"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Records requested per page. Must be non-zero. Default: 50
    pub page_size: NonZeroUsize,

    /// Loading placeholders appended after a non-empty base list. Default: 5
    pub tail_placeholder_count: usize,

    /// Skeleton cards drawn while the list is loading. Default: 10
    pub skeleton_count: usize,

    /// JSON file read by the bundled `JsonFileSource`.
    pub data_file: Option<PathBuf>,

    /// Log filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. `RUST_LOG` takes precedence. Default: `"info"`
    pub log_level: Option<String>,

    /// Write logs to this rotating file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            tail_placeholder_count: 5,
            skeleton_count: 10,
            data_file: None,
            log_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionsError::Config` for malformed TOML, unknown value
    /// types, or a `page_size` of zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use connections::Config;
    ///
    /// let config = Config::from_toml_str("page_size = 20")?;
    /// assert_eq!(config.page_size.get(), 20);
    /// assert_eq!(config.skeleton_count, 10);
    /// # Ok::<(), connections::ConnectionsError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ConnectionsError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionsError::Io` if the file exists but cannot be read,
    /// or `ConnectionsError::Config` if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Creates the application state for a new session.
///
/// # Example
///
/// ```rust
/// use connections::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.store.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        page_size = config.page_size.get(),
        tail_placeholder_count = config.tail_placeholder_count,
        skeleton_count = config.skeleton_count,
        "initializing connections"
    );

    AppState::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.page_size.get(), 50);
        assert_eq!(config.tail_placeholder_count, 5);
        assert_eq!(config.skeleton_count, 10);
        assert!(config.data_file.is_none());
        assert!(config.log_level.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn empty_toml_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.page_size.get(), 50);
        assert_eq!(config.skeleton_count, 10);
    }

    #[test]
    fn toml_overrides_fields() {
        let config = Config::from_toml_str(
            r#"
            page_size = 10
            tail_placeholder_count = 2
            data_file = "people.json"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.page_size.get(), 10);
        assert_eq!(config.tail_placeholder_count, 2);
        assert_eq!(config.skeleton_count, 10);
        assert_eq!(config.data_file, Some(PathBuf::from("people.json")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = Config::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, ConnectionsError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = Config::from_toml_str("page_size = ").unwrap_err();
        assert!(matches!(err, ConnectionsError::Config(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_file(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.page_size.get(), 50);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "skeleton_count = 3").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.skeleton_count, 3);
    }

    #[test]
    fn initialize_uses_config_settings() {
        let config = Config::from_toml_str("page_size = 7\nskeleton_count = 2").unwrap();
        let state = initialize(&config);
        assert_eq!(state.page_size.get(), 7);
        assert_eq!(state.skeleton_count, 2);
    }
}
