//! View mode and fetch status state types.
//!
//! This module defines the state machine enums that the presentation layer reads
//! to decide what to show.
//!
//! # State Machine
//!
//! The list is shown in exactly one of two view modes:
//! - **Browsing**: the paginated base list, with tail placeholders
//! - **Searching**: the search overlay's results, never paginated
//!
//! Two independent [`FetchStatus`] values track the base pagination and the
//! search overlay. They may both be non-idle at the same time.
//!
//! # Example
//!
//! ```rust
//! use connections::app::modes::{FetchStatus, ViewMode};
//!
//! let mode = ViewMode::Browsing;
//! let status = FetchStatus::Error("network error".to_string());
//! assert_eq!(status.error(), Some("network error"));
//! assert!(!mode.is_searching());
//! ```

use serde::{Deserialize, Serialize};

/// Which list the presentation layer shows.
///
/// Transitions only through an explicit search submission (to `Searching`) or
/// an explicit search clear (to `Browsing`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Shows the paginated base list.
    #[default]
    Browsing,

    /// Shows the search overlay's results.
    Searching,
}

impl ViewMode {
    /// Returns `true` while the search overlay is active.
    #[must_use]
    pub const fn is_searching(self) -> bool {
        matches!(self, Self::Searching)
    }
}

/// Progress of one asynchronous operation type (page fetch or search).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    /// No operation outstanding and the last one (if any) succeeded.
    #[default]
    Idle,

    /// An operation is in flight.
    Loading,

    /// The last operation failed with a human-readable message.
    Error(String),
}

impl FetchStatus {
    /// Returns `true` while an operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the failure message, if the last operation failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Idle | Self::Loading => None,
        }
    }
}
