//! Document and error types for the store capability.

use chrono::{DateTime, Utc};
use gradbook_core::DocumentId;
use serde_json::{Map, Value};
use thiserror::Error;

/// Schema-less document field map.
pub type Fields = Map<String, Value>;

/// Timestamp field stamped by the store at creation.
pub const FIELD_CREATED_AT: &str = "createdAt";

/// Timestamp field stamped by the store on every write.
pub const FIELD_UPDATED_AT: &str = "updatedAt";

/// A document as returned by a listing.
///
/// The identifier and the two server timestamps are document metadata,
/// not entries in `fields`; the store stamps them itself and callers
/// never supply them.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Fields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Store-level failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier did not resolve to a document in the collection.
    #[error("document '{id}' not found in collection '{collection}'")]
    NotFound { collection: String, id: String },

    /// The backing store itself failed.
    ///
    /// Test doubles and remote adapters surface transport failures
    /// through this variant.
    #[error("store backend failure: {reason}")]
    Backend { reason: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
