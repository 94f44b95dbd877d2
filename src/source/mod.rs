//! Fetch collaborators delivering connection pages.
//!
//! # Modules
//!
//! - `backend`: [`ConnectionSource`] trait the worker fetches through
//! - `json`: JSON file-backed source
//! - `memory`: `Vec`-backed source

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::ConnectionSource;
pub use json::JsonFileSource;
pub use memory::InMemorySource;
