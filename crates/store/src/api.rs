//! Document store operations.
//!
//! ## Collection Model
//!
//! - Documents live in named collections
//! - Identifiers are assigned by the store at creation, exactly once
//! - `createdAt` / `updatedAt` are stamped server-side
//!
//! ## Error Handling
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Delete of an unknown id | `NotFound` |
//! | Backend/transport failure | `Backend` |
//!
//! Listing an unknown collection is not an error; it returns an empty
//! sequence, matching hosted-store behavior.

use crate::document::{Document, Fields, SortDirection, StoreResult};
use gradbook_core::DocumentId;

/// Collection-level document store operations.
///
/// Implementations must be safe to share across threads; callers hold
/// them behind `Arc<dyn DocumentStore>`.
///
/// ## Contract
///
/// - `create` assigns a fresh identifier on every call; identical field
///   sets produce distinct documents
/// - `list` returns the whole collection, ordered by the named field
/// - `delete` propagates the store's own not-found error; there is no
///   special-casing of missing documents
pub trait DocumentStore: Send + Sync {
    /// Store a field set and return the assigned identifier.
    ///
    /// The store stamps `createdAt` and `updatedAt` itself; any such
    /// entries in `fields` are ignored in ordering decisions.
    fn create(&self, collection: &str, fields: Fields) -> StoreResult<DocumentId>;

    /// List all documents in a collection, ordered by `order_by`.
    ///
    /// `order_by` may name the server timestamps (`createdAt`,
    /// `updatedAt`) or any document field; field ordering is textual.
    /// An unknown collection yields an empty vector.
    fn list(
        &self,
        collection: &str,
        order_by: &str,
        direction: SortDirection,
    ) -> StoreResult<Vec<Document>>;

    /// Delete a document by identifier.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: the id does not resolve in the collection
    fn delete(&self, collection: &str, id: &DocumentId) -> StoreResult<()>;
}
