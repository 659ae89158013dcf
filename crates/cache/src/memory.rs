//! In-memory cache slot.

use crate::{CacheResult, CacheSlot};
use parking_lot::Mutex;

/// Cache slot held in process memory.
///
/// Used by tests and by embedded deployments with no persistent local
/// storage. Clone-free; share behind an `Arc`.
#[derive(Default)]
pub struct MemorySlot {
    cell: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-filled with a payload.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        MemorySlot {
            cell: Mutex::new(Some(payload.into())),
        }
    }
}

impl CacheSlot for MemorySlot {
    fn load(&self) -> CacheResult<Option<String>> {
        Ok(self.cell.lock().clone())
    }

    fn store(&self, payload: &str) -> CacheResult<()> {
        *self.cell.lock() = Some(payload.to_string());
        Ok(())
    }
}
