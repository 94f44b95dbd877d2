//! Application state container and view model computation.
//!
//! [`AppState`] owns the three stateful components of the coordinator (record
//! store, pagination controller, search overlay) together with the presentation
//! settings. It is the single source of truth for what is rendered; nothing is
//! held in ambient globals, and the runtime passes the state by reference to the
//! event handler and to the renderer.
//!
//! # Example
//!
//! ```rust
//! use connections::{AppState, Config};
//!
//! let state = AppState::new(&Config::default());
//! let vm = state.compute_viewmodel();
//! assert!(vm.list_data.is_empty());
//! ```

use super::modes::{FetchStatus, ViewMode};
use super::pagination::PaginationController;
use super::resolver::{resolve, ViewInputs};
use super::search::SearchOverlay;
use super::store::RecordStore;
use crate::ui::viewmodel::UIViewModel;
use crate::Config;
use std::num::NonZeroUsize;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Paginated base list.
    pub store: RecordStore,

    /// Page cursor and base fetch status.
    pub pagination: PaginationController,

    /// Search query, results and search status.
    pub search: SearchOverlay,

    /// Records requested per page.
    pub page_size: NonZeroUsize,

    /// Loading placeholders appended to the base list.
    pub tail_placeholder_count: usize,

    /// Skeleton cards drawn while the whole list is loading.
    pub skeleton_count: usize,

    /// Number of `Mount` events seen; anything above one is a remount.
    pub mounts: u32,
}

impl AppState {
    /// Creates an empty state with settings taken from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            store: RecordStore::new(),
            pagination: PaginationController::new(),
            search: SearchOverlay::new(),
            page_size: config.page_size,
            tail_placeholder_count: config.tail_placeholder_count,
            skeleton_count: config.skeleton_count,
            mounts: 0,
        }
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.search.view_mode()
    }

    #[must_use]
    pub const fn base_status(&self) -> &FetchStatus {
        self.pagination.status()
    }

    #[must_use]
    pub const fn search_status(&self) -> &FetchStatus {
        self.search.status()
    }

    /// Drops all session data ahead of a remount.
    ///
    /// In-flight page and search responses become stale: the pagination reset
    /// forgets the in-flight request and the overlay clear bumps its generation.
    pub fn reset(&mut self) {
        self.store.clear();
        self.pagination.reset();
        self.search.clear();
    }

    /// Computes the renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let _span = tracing::trace_span!(
            "compute_viewmodel",
            mode = ?self.view_mode(),
            base_len = self.store.len(),
            result_len = self.search.results().len()
        )
        .entered();

        resolve(&ViewInputs {
            mode: self.view_mode(),
            base_list: self.store.records(),
            search_results: self.search.results(),
            base_status: self.base_status(),
            search_status: self.search_status(),
            tail_placeholders: self.tail_placeholder_count,
            skeleton_count: self.skeleton_count,
        })
    }
}
