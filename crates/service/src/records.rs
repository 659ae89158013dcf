//! Record service operations.
//!
//! Every operation is a short sequential composition over the injected
//! capabilities; nothing here retries, caches, or runs concurrently. A
//! long migration cannot be interrupted once started.

use crate::error::{ServiceError, ServiceResult};
use crate::seed;
use gradbook_cache::{read_cached_records, write_cached_records, CacheSlot};
use gradbook_core::{DocumentId, GraduateRecord, RecordDraft};
use gradbook_store::document::FIELD_CREATED_AT;
use gradbook_store::{DocumentStore, SortDirection};
use std::sync::Arc;

/// Collection holding the graduate records.
pub const GRADUATES_COLLECTION: &str = "graduates";

/// Service configuration.
///
/// Only the collection name is configurable; the store connection itself
/// is whatever capability was injected.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub collection: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            collection: GRADUATES_COLLECTION.to_string(),
        }
    }
}

/// Outcome of a cache migration.
///
/// `total` is the cache length; `migrated` counts the records actually
/// written. The two differ only in the degenerate zero/zero case — a
/// partial failure surfaces as
/// [`ServiceError::MigrationAborted`] instead, carrying its own counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: usize,
    pub total: usize,
}

/// Orchestration facade over the document store and the cache slot.
///
/// # Thread Safety
///
/// Clone is cheap (Arc clones) and all clones share the same underlying
/// store and cache.
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn DocumentStore>,
    cache: Arc<dyn CacheSlot>,
    config: ServiceConfig,
}

impl RecordService {
    /// Create a service over the given capabilities with the default
    /// collection.
    pub fn new(store: Arc<dyn DocumentStore>, cache: Arc<dyn CacheSlot>) -> Self {
        Self::with_config(store, cache, ServiceConfig::default())
    }

    /// Create a service with an explicit configuration.
    pub fn with_config(
        store: Arc<dyn DocumentStore>,
        cache: Arc<dyn CacheSlot>,
        config: ServiceConfig,
    ) -> Self {
        RecordService {
            store,
            cache,
            config,
        }
    }

    /// Add a record and return its store-assigned identifier.
    ///
    /// The draft's defaults apply: empty feedback, under-review status.
    /// `from_local_cache` marks provenance for migrated records.
    ///
    /// ## Errors
    ///
    /// - `StoreWrite`: the store create failed
    pub fn add(&self, draft: &RecordDraft, from_local_cache: bool) -> ServiceResult<DocumentId> {
        let fields = draft.to_fields(from_local_cache);
        let id = self
            .store
            .create(&self.config.collection, fields)
            .map_err(|source| ServiceError::StoreWrite { source })?;
        tracing::debug!(
            target: "gradbook::service",
            id = %id,
            code = %draft.code,
            from_local_cache,
            "record added"
        );
        Ok(id)
    }

    /// List all records, newest first.
    ///
    /// ## Errors
    ///
    /// - `StoreRead`: the listing failed; no partial results are returned
    pub fn list(&self) -> ServiceResult<Vec<GraduateRecord>> {
        let documents = self
            .store
            .list(
                &self.config.collection,
                FIELD_CREATED_AT,
                SortDirection::Descending,
            )
            .map_err(|source| ServiceError::StoreRead { source })?;

        Ok(documents
            .into_iter()
            .map(|doc| {
                GraduateRecord::from_parts(doc.id, &doc.fields, doc.created_at, doc.updated_at)
            })
            .collect())
    }

    /// Delete a record by identifier.
    ///
    /// ## Errors
    ///
    /// - `InvalidArgument`: the identifier is empty; the store is not
    ///   contacted
    /// - `StoreDelete`: the store delete failed (including not-found,
    ///   which propagates unchanged)
    pub fn delete(&self, id: &DocumentId) -> ServiceResult<()> {
        if id.is_empty() {
            return Err(ServiceError::InvalidArgument {
                reason: "empty document id".to_string(),
            });
        }
        self.store
            .delete(&self.config.collection, id)
            .map_err(|source| ServiceError::StoreDelete { source })?;
        tracing::debug!(target: "gradbook::service", id = %id, "record deleted");
        Ok(())
    }

    /// Copy every cached record into the store.
    ///
    /// An empty or unreadable cache returns `{0, 0}` without contacting
    /// the store. Otherwise records are written sequentially in cache
    /// order, each flagged `from_local_cache`. No deduplication is
    /// performed: migrating the same cache twice produces duplicate
    /// records with distinct identifiers and identical codes.
    ///
    /// ## Errors
    ///
    /// - `MigrationAborted`: a write failed partway; records written
    ///   before the failure stay committed and are counted in the error
    pub fn migrate(&self) -> ServiceResult<MigrationReport> {
        let drafts = read_cached_records(self.cache.as_ref());
        let total = drafts.len();
        if total == 0 {
            tracing::info!(target: "gradbook::service", "local cache empty, nothing to migrate");
            return Ok(MigrationReport {
                migrated: 0,
                total: 0,
            });
        }

        let mut migrated = 0;
        for draft in &drafts {
            match self.add(draft, true) {
                Ok(_) => migrated += 1,
                Err(source) => {
                    return Err(ServiceError::MigrationAborted {
                        migrated,
                        total,
                        source: Box::new(source),
                    })
                }
            }
        }

        tracing::info!(
            target: "gradbook::service",
            migrated,
            total,
            "cache migration complete"
        );
        Ok(MigrationReport { migrated, total })
    }

    /// Write the fixed demonstration records to the cache slot, then add
    /// the same records to the store.
    ///
    /// The cache write happens first and overwrites any existing slot
    /// content. Failure of the cache write or of any store add aborts
    /// the remaining work.
    ///
    /// ## Errors
    ///
    /// - `CacheWrite`: the slot could not be written
    /// - `StoreWrite`: a store add failed
    pub fn create_initial_data(&self) -> ServiceResult<()> {
        let drafts = seed::demonstration_records();

        write_cached_records(self.cache.as_ref(), &drafts)
            .map_err(|source| ServiceError::CacheWrite { source })?;
        tracing::debug!(target: "gradbook::service", "demonstration records cached");

        for draft in &drafts {
            self.add(draft, false)?;
        }
        tracing::info!(target: "gradbook::service", count = drafts.len(), "demonstration records created");
        Ok(())
    }
}
