//! Local cache capability.
//!
//! The legacy system staged records in a single named slot of
//! browser-local storage. That slot is modeled as an injected capability:
//! the [`CacheSlot`] trait covers load/store of one string payload, with
//! [`MemorySlot`] for tests and [`FileSlot`] as the on-disk counterpart.
//!
//! Reading records out of the slot is deliberately forgiving: an absent,
//! empty, or malformed payload yields an empty sequence, logged on the
//! `gradbook::cache` target and never surfaced to the caller. Writing is
//! fallible and propagates normally.

pub mod file;
pub mod memory;
pub mod reader;

pub use file::FileSlot;
pub use memory::MemorySlot;
pub use reader::{read_cached_records, write_cached_records};

use thiserror::Error;

/// One named slot of local persistent key-value storage.
///
/// A slot holds at most one string payload. Implementations must be safe
/// to share across threads; callers hold them behind `Arc<dyn CacheSlot>`.
pub trait CacheSlot: Send + Sync {
    /// Load the slot's payload. `None` when the slot has never been written.
    fn load(&self) -> CacheResult<Option<String>>;

    /// Overwrite the slot's payload.
    fn store(&self, payload: &str) -> CacheResult<()>;
}

/// Cache-level failures.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The slot could not be read or written.
    #[error("cache slot i/o failure: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The payload to be written could not be encoded.
    #[error("cache payload encoding failure: {source}")]
    Encode {
        #[from]
        source: serde_json::Error,
    },
}

/// Result alias for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
