//! View model types representing renderable list state.
//!
//! View models are computed from application state by the presentation resolver
//! and consumed by whatever renders the list. They contain no business logic,
//! only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use connections::ui::viewmodel::{ErrorBanner, UIViewModel};
//! use connections::ViewMode;
//!
//! let vm = UIViewModel {
//!     mode: ViewMode::Browsing,
//!     list_data: vec![],
//!     show_skeleton: false,
//!     skeleton_count: 0,
//!     tail_placeholder_count: 0,
//!     error: Some(ErrorBanner { message: "network error".to_string(), retryable: true }),
//!     empty_state: None,
//! };
//! assert!(vm.error.as_ref().is_some_and(|e| e.retryable));
//! ```

use crate::app::modes::ViewMode;
use crate::domain::ConnectionRecord;

/// Complete view model for one render of the connection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Mode the list is shown in.
    pub mode: ViewMode,

    /// Records to show: search results while searching, the base list otherwise.
    pub list_data: Vec<ConnectionRecord>,

    /// Whether the whole list is replaced by a loading skeleton.
    pub show_skeleton: bool,

    /// Number of skeleton cards to draw; zero unless `show_skeleton`.
    pub skeleton_count: usize,

    /// Loading placeholders appended after `list_data`.
    pub tail_placeholder_count: usize,

    /// Error to surface, if any.
    pub error: Option<ErrorBanner>,

    /// Set when there is nothing to show and nothing is coming.
    pub empty_state: Option<EmptyState>,
}

/// Error message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    /// Human-readable message from the failed operation.
    pub message: String,

    /// Whether a retry handler is offered. Only base-fetch errors are retryable.
    pub retryable: bool,
}

/// Which kind of empty list is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Browsing and the source has delivered no connections.
    NoConnections,

    /// Searching and the search matched nothing.
    NoResults,
}

impl EmptyState {
    /// Primary message for the empty list.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoConnections => "No connections yet",
            Self::NoResults => "No matching connections",
        }
    }
}
