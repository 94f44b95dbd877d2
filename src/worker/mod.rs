//! Worker executing side effects on behalf of the application layer.
//!
//! The application layer describes fetches and searches as messages; the worker
//! runs them against the fetch and search collaborators and answers with
//! responses that the runtime feeds back as events.
//!
//! # Architecture
//!
//! - `messages`: Tagged request/response protocol types
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ConnectionsWorker;
pub use messages::{WorkerMessage, WorkerResponse};
