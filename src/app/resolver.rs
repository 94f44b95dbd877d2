//! Presentation resolver: pure mapping from coordinator state to a view model.
//!
//! The resolver performs no I/O and keeps no state. It is recomputed on every
//! render; `handle_event` reports whether anything changed so the runtime can
//! skip recomputation between events.
//!
//! # Rules
//!
//! - Skeleton: search in flight, or first base page in flight with nothing shown.
//! - List: search results while searching, base list otherwise.
//! - Tail placeholders: browsing with a non-empty list only.
//! - Error: base error (retryable) wins over search error (not retryable);
//!   hidden while the skeleton is shown.
//! - Empty state: empty list, visible list not loading, no skeleton, no error.

use super::modes::{FetchStatus, ViewMode};
use crate::domain::ConnectionRecord;
use crate::ui::viewmodel::{EmptyState, ErrorBanner, UIViewModel};

/// Borrowed inputs of the resolver.
#[derive(Debug, Clone, Copy)]
pub struct ViewInputs<'a> {
    pub mode: ViewMode,
    pub base_list: &'a [ConnectionRecord],
    pub search_results: &'a [ConnectionRecord],
    pub base_status: &'a FetchStatus,
    pub search_status: &'a FetchStatus,
    pub tail_placeholders: usize,
    pub skeleton_count: usize,
}

/// Computes the view model for the given inputs.
///
/// # Example
///
/// ```rust
/// use connections::app::modes::{FetchStatus, ViewMode};
/// use connections::app::resolver::{resolve, ViewInputs};
///
/// let vm = resolve(&ViewInputs {
///     mode: ViewMode::Browsing,
///     base_list: &[],
///     search_results: &[],
///     base_status: &FetchStatus::Loading,
///     search_status: &FetchStatus::Idle,
///     tail_placeholders: 5,
///     skeleton_count: 10,
/// });
/// assert!(vm.show_skeleton);
/// assert!(vm.list_data.is_empty());
/// ```
#[must_use]
pub fn resolve(inputs: &ViewInputs<'_>) -> UIViewModel {
    let show_skeleton = inputs.search_status.is_loading()
        || (inputs.base_status.is_loading() && inputs.base_list.is_empty());

    let (list, list_status) = match inputs.mode {
        ViewMode::Searching => (inputs.search_results, inputs.search_status),
        ViewMode::Browsing => (inputs.base_list, inputs.base_status),
    };

    let tail_placeholder_count = if inputs.mode == ViewMode::Browsing && !list.is_empty() {
        inputs.tail_placeholders
    } else {
        0
    };

    let error = if show_skeleton {
        None
    } else {
        resolve_error(inputs.base_status, inputs.search_status)
    };

    let empty_state = if list.is_empty() && !list_status.is_loading() && !show_skeleton && error.is_none() {
        Some(match inputs.mode {
            ViewMode::Browsing => EmptyState::NoConnections,
            ViewMode::Searching => EmptyState::NoResults,
        })
    } else {
        None
    };

    UIViewModel {
        mode: inputs.mode,
        list_data: list.to_vec(),
        show_skeleton,
        skeleton_count: if show_skeleton { inputs.skeleton_count } else { 0 },
        tail_placeholder_count,
        error,
        empty_state,
    }
}

fn resolve_error(base_status: &FetchStatus, search_status: &FetchStatus) -> Option<ErrorBanner> {
    if let Some(message) = base_status.error() {
        return Some(ErrorBanner {
            message: message.to_string(),
            retryable: true,
        });
    }

    search_status.error().map(|message| ErrorBanner {
        message: message.to_string(),
        retryable: false,
    })
}
