//! Public types for the gradbook unified API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Core record types
pub use gradbook_core::{DocumentId, GraduateRecord, RecordDraft, RecordStatus};

// Store capability
pub use gradbook_store::{
    Document, DocumentStore, Fields, MemoryStore, SortDirection, StoreError,
};

// Cache capability
pub use gradbook_cache::{
    read_cached_records, write_cached_records, CacheError, CacheSlot, FileSlot, MemorySlot,
};

// Record service
pub use gradbook_service::{
    demonstration_records, MigrationReport, RecordService, ServiceConfig, ServiceError,
    GRADUATES_COLLECTION,
};

// Presentation
pub use gradbook_view::{
    render, status_badge, AlwaysConfirm, Notice, NoticeKind, Prompt, TableView, ViewState,
};
