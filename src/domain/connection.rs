//! Connection record domain model.
//!
//! A connection is a person the user is connected to, as delivered by the remote
//! source. Records are immutable values; `email` is the identity key.

use serde::{Deserialize, Serialize};

/// A single connection as delivered by the fetch collaborator.
///
/// # Fields
///
/// - `name`: Display name
/// - `cell`: Mobile phone number
/// - `email`: Unique identity key within a record store
/// - `location`: Free-form location text (e.g. "Lyon, France")
/// - `thumbnail`: URI of the avatar thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub name: String,
    pub cell: String,
    pub email: String,
    pub location: String,
    pub thumbnail: String,
}

impl ConnectionRecord {
    /// Creates a record from its five fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use connections::ConnectionRecord;
    ///
    /// let record = ConnectionRecord::new(
    ///     "Alice Martin",
    ///     "+33 6 12 34 56 78",
    ///     "alice@example.com",
    ///     "Lyon, France",
    ///     "https://example.com/alice.jpg",
    /// );
    /// assert_eq!(record.key(), "alice@example.com");
    /// ```
    pub fn new(
        name: impl Into<String>,
        cell: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cell: cell.into(),
            email: email.into(),
            location: location.into(),
            thumbnail: thumbnail.into(),
        }
    }

    /// Returns the identity key of the record (its email).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.email
    }
}
