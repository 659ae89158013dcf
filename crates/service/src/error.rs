//! Service-level errors.
//!
//! Each variant names the operation that failed and keeps the underlying
//! store or cache error as its source. Cache *parse* failures never
//! appear here — the cache reader swallows them into an empty sequence
//! by design.

use gradbook_cache::CacheError;
use gradbook_store::StoreError;
use thiserror::Error;

/// Failures surfaced by [`RecordService`](crate::RecordService).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A caller-supplied argument was unusable; the store was not
    /// contacted.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A store create failed.
    #[error("store write failed: {source}")]
    StoreWrite {
        #[source]
        source: StoreError,
    },

    /// A store listing failed; no partial results are returned.
    #[error("store read failed: {source}")]
    StoreRead {
        #[source]
        source: StoreError,
    },

    /// A store delete failed.
    #[error("store delete failed: {source}")]
    StoreDelete {
        #[source]
        source: StoreError,
    },

    /// Writing the cache slot failed.
    #[error("cache write failed: {source}")]
    CacheWrite {
        #[source]
        source: CacheError,
    },

    /// A migration stopped partway.
    ///
    /// Records written before the failure stay committed; `migrated`
    /// counts them, `total` is the cache length.
    #[error("migration aborted after {migrated} of {total} records: {source}")]
    MigrationAborted {
        migrated: usize,
        total: usize,
        #[source]
        source: Box<ServiceError>,
    },
}

/// Result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
