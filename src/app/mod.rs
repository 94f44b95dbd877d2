//! Application layer coordinating state, events, and actions.
//!
//! This module is the coordinator proper. It sits between the presentation
//! runtime (main.rs or any other host) and the worker that talks to the fetch
//! and search collaborators.
//!
//! # Architecture
//!
//! ```text
//! Presentation → Events → Event Handler → State Mutations → Actions → Worker
//!                              ↑                                        ↓
//!                              └──────────── Worker Responses ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: View mode and fetch status types
//! - [`pagination`]: Page cursor and at-most-one-in-flight fetch discipline
//! - [`resolver`]: Pure mapping from state to view model
//! - [`search`]: Generation-tagged search overlay
//! - [`state`]: Central state container
//! - [`store`]: Append-only base list

pub mod actions;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod resolver;
pub mod search;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{FetchStatus, ViewMode};
pub use state::AppState;
