//! Core domain types for the graduate records manager.
//!
//! This crate defines the shapes shared by every layer:
//! - `DocumentId`: opaque store-assigned identifier
//! - `RecordStatus`: approval state with its legacy string encoding
//! - `RecordDraft`: the flat record shape held in the local cache
//! - `GraduateRecord`: the full stored record, including provenance and
//!   store-assigned timestamps
//!
//! Higher layers (store, cache, service, view) depend on this crate and
//! nothing in here depends on them.

pub mod id;
pub mod record;

pub use id::DocumentId;
pub use record::{field, GraduateRecord, RecordDraft, RecordStatus};
