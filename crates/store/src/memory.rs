//! In-memory document store.
//!
//! Reference implementation of [`DocumentStore`] backed by a `DashMap`
//! keyed by collection name. Used by the test suites and by embedded
//! deployments that have no hosted store.
//!
//! # Design
//!
//! - DashMap: per-collection entry, no cross-collection contention
//! - Identifiers: UUIDv4, hex-compact, assigned at creation
//! - Ordering: a global insertion sequence breaks timestamp ties, so a
//!   `createdAt` listing is stable even when two creates land on the
//!   same clock tick

use crate::api::DocumentStore;
use crate::document::{
    Document, Fields, SortDirection, StoreError, StoreResult, FIELD_CREATED_AT, FIELD_UPDATED_AT,
};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use gradbook_core::DocumentId;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use uuid::Uuid;

struct StoredEntry {
    id: DocumentId,
    fields: Fields,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    seq: u64,
}

impl StoredEntry {
    fn to_document(&self) -> Document {
        Document {
            id: self.id.clone(),
            fields: self.fields.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// In-memory document store.
///
/// # Thread Safety
///
/// All operations are thread-safe; different collections never contend.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<StoredEntry>>,
    seq: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently in a collection.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|entries| entries.len())
            .unwrap_or(0)
    }
}

impl DocumentStore for MemoryStore {
    fn create(&self, collection: &str, fields: Fields) -> StoreResult<DocumentId> {
        let now = Utc::now();
        let id = DocumentId::new(Uuid::new_v4().simple().to_string());
        let seq = self.seq.fetch_add(1, AtomicOrdering::Relaxed);

        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredEntry {
                id: id.clone(),
                fields,
                created_at: now,
                updated_at: now,
                seq,
            });

        tracing::debug!(
            target: "gradbook::store",
            collection,
            id = %id,
            "document created"
        );
        Ok(id)
    }

    fn list(
        &self,
        collection: &str,
        order_by: &str,
        direction: SortDirection,
    ) -> StoreResult<Vec<Document>> {
        let mut documents: Vec<(u64, Document)> = match self.collections.get(collection) {
            Some(entries) => entries
                .iter()
                .map(|entry| (entry.seq, entry.to_document()))
                .collect(),
            None => return Ok(Vec::new()),
        };

        documents.sort_by(|(seq_a, a), (seq_b, b)| {
            let ordering = compare_by_field(a, b, order_by).then(seq_a.cmp(seq_b));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        Ok(documents.into_iter().map(|(_, doc)| doc).collect())
    }

    fn delete(&self, collection: &str, id: &DocumentId) -> StoreResult<()> {
        let mut entries =
            self.collections
                .get_mut(collection)
                .ok_or_else(|| StoreError::NotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                })?;

        let position = entries
            .iter()
            .position(|entry| &entry.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        entries.remove(position);
        tracing::debug!(
            target: "gradbook::store",
            collection,
            id = %id,
            "document deleted"
        );
        Ok(())
    }
}

fn compare_by_field(a: &Document, b: &Document, order_by: &str) -> Ordering {
    match order_by {
        FIELD_CREATED_AT => a.created_at.cmp(&b.created_at),
        FIELD_UPDATED_AT => a.updated_at.cmp(&b.updated_at),
        name => field_sort_text(&a.fields, name).cmp(&field_sort_text(&b.fields, name)),
    }
}

fn field_sort_text(fields: &Fields, name: &str) -> String {
    match fields.get(name) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
