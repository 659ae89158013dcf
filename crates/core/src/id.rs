//! Store-assigned document identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by the document store at creation.
///
/// Identifiers are never client-generated and never mutated. The inner
/// representation is a plain string so that any backing store's id format
/// (UUID, random token, path segment) fits without conversion.
///
/// # Examples
///
/// ```
/// use gradbook_core::DocumentId;
///
/// let id = DocumentId::new("a1b2c3");
/// assert_eq!(id.as_str(), "a1b2c3");
/// assert!(!id.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create an identifier from a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        DocumentId(raw.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier carries no content.
    ///
    /// An empty identifier never resolves to a document; callers use this
    /// to fail fast before contacting the store.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the identifier, returning the raw string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(raw: String) -> Self {
        DocumentId(raw)
    }
}

impl From<&str> for DocumentId {
    fn from(raw: &str) -> Self {
        DocumentId(raw.to_string())
    }
}
