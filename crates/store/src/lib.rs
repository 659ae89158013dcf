//! Document store capability.
//!
//! The hosted document database is modeled as an injected capability:
//! the [`DocumentStore`] trait covers the three
//! collection-level operations the records manager consumes (create,
//! ordered list, delete-by-id), and [`MemoryStore`] is the in-memory
//! reference implementation used by tests and embedded deployments.
//!
//! The store is treated as already reliable; nothing here retries or
//! recovers. Failures surface as [`StoreError`] and propagate upward
//! unchanged.

pub mod api;
pub mod document;
pub mod memory;

pub use api::DocumentStore;
pub use document::{Document, Fields, SortDirection, StoreError, StoreResult};
pub use memory::MemoryStore;
