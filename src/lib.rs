//! Gradbook: a graduate records manager over a pluggable document store.
//!
//! The workspace splits along capability seams:
//!
//! - [`gradbook_core`]: record types shared by every layer
//! - [`gradbook_store`]: the document store capability and its in-memory
//!   reference implementation
//! - [`gradbook_cache`]: the legacy local cache slot capability
//! - [`gradbook_service`]: the orchestration facade (add, list, delete,
//!   migrate, demonstration seeding)
//! - [`gradbook_view`]: the records table as a headless state machine
//!
//! This crate re-exports the public surface of all of them.
//!
//! # Example
//!
//! ```
//! use gradbook::types::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let cache = Arc::new(MemorySlot::new());
//! let service = RecordService::new(store, cache);
//!
//! service.create_initial_data().unwrap();
//! let records = service.list().unwrap();
//! assert_eq!(records.len(), 2);
//! ```

pub mod types;

pub use types::*;
