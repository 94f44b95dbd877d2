//! Search collaborator abstraction.

use crate::domain::error::Result;
use crate::domain::ConnectionRecord;

/// Runs a query over a corpus of connections.
///
/// The matching and ordering rules belong to the implementation; the search
/// overlay keeps whatever order is returned.
pub trait SearchEngine: Send {
    /// Returns the records of `corpus` matching `query`, in engine order.
    ///
    /// # Errors
    ///
    /// Returns an error when the search cannot be completed. The error's display
    /// text is shown to the user without a retry handler.
    fn search(&mut self, query: &str, corpus: &[ConnectionRecord]) -> Result<Vec<ConnectionRecord>>;
}
