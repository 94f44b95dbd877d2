//! Domain layer for the connections coordinator.
//!
//! This module contains the core domain types, independent of the fetch source,
//! search engine, or presentation layer in use.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`connection`]: Connection record model
//!
//! # Examples
//!
//! ```
//! use connections::domain::{ConnectionRecord, Result};
//!
//! fn sample() -> Result<ConnectionRecord> {
//!     Ok(ConnectionRecord::new("Ada", "555-0100", "ada@example.com", "London", ""))
//! }
//! ```

pub mod connection;
pub mod error;

pub use connection::ConnectionRecord;
pub use error::{ConnectionsError, Result};
