//! Error types for the connections coordinator.
//!
//! This module defines the centralized error type [`ConnectionsError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors produced by the fetch and search collaborators never unwind through the
//! application layer: the worker turns them into failure responses, and the
//! application layer turns those into `FetchStatus::Error` states.

use thiserror::Error;

/// The main error type for connections operations.
///
/// # Examples
///
/// ```
/// use connections::ConnectionsError;
///
/// fn fetch() -> Result<(), ConnectionsError> {
///     Err(ConnectionsError::Source("network error".to_string()))
/// }
///
/// assert_eq!(fetch().unwrap_err().to_string(), "network error");
/// ```
#[derive(Debug, Error)]
pub enum ConnectionsError {
    /// The fetch collaborator could not deliver a page.
    ///
    /// The message is shown to the user verbatim next to a retry handler, so it
    /// carries no prefix.
    #[error("{0}")]
    Source(String),

    /// The search collaborator could not complete a query.
    ///
    /// Shown to the user verbatim, without a retry handler.
    #[error("{0}")]
    Search(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The worker received a message it could not process.
    #[error("Worker error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for connections operations.
pub type Result<T> = std::result::Result<T, ConnectionsError>;
