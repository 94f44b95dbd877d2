//! Fetch collaborator abstraction.
//!
//! This module defines the [`ConnectionSource`] trait the worker fetches pages
//! through. The trait is minimal and maps directly to the one operation the
//! pagination controller needs.

use crate::domain::error::Result;
use crate::domain::ConnectionRecord;

/// A remote or local source of connection records, read page by page.
///
/// The pagination controller owns the cursor: it passes the number of records
/// already received as `offset`. Implementations return at most `size` records
/// starting at that position, in a stable order, and an empty page once the
/// source is exhausted. Suppressing duplicate emails is the source's job.
///
/// # Implementations
///
/// - [`JsonFileSource`](crate::source::JsonFileSource): records from a JSON file
/// - [`InMemorySource`](crate::source::InMemorySource): records held in a `Vec`
///
/// # Examples
///
/// ```
/// use connections::source::{ConnectionSource, InMemorySource};
/// use connections::ConnectionRecord;
///
/// let mut source = InMemorySource::new(vec![
///     ConnectionRecord::new("Ada", "", "ada@x", "", ""),
///     ConnectionRecord::new("Bob", "", "bob@x", "", ""),
/// ]);
/// let page = source.fetch_page(1, 50)?;
/// assert_eq!(page.len(), 1);
/// # Ok::<(), connections::ConnectionsError>(())
/// ```
pub trait ConnectionSource: Send {
    /// Fetches up to `size` records starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error when the page cannot be delivered. The error's display
    /// text is shown to the user next to a retry handler.
    fn fetch_page(&mut self, offset: usize, size: usize) -> Result<Vec<ConnectionRecord>>;
}
