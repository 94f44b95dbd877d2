//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` after
//! processing each event, and the runtime executes them in sequence. Results of
//! worker calls come back as [`Event::WorkerResponse`](crate::app::Event).
//!
//! # Example
//!
//! ```rust
//! use connections::app::Action;
//! use connections::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::fetch_page(1, 0, 50))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a message to the worker that talks to the fetch and search
    /// collaborators.
    PostToWorker(WorkerMessage),
}
