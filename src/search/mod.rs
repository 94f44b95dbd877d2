//! Search collaborators.
//!
//! - `engine`: [`SearchEngine`] trait the worker searches through
//! - `fuzzy`: skim-based fuzzy engine over name, email, location and cell

pub mod engine;
pub mod fuzzy;

pub use engine::SearchEngine;
pub use fuzzy::FuzzySearch;
