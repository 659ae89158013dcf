//! Shared fixtures for the end-to-end suite.

use gradbook::types::*;
use std::sync::Arc;

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn setup() -> (RecordService, Arc<MemoryStore>, Arc<MemorySlot>) {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let cache = Arc::new(MemorySlot::new());
    let service = RecordService::new(store.clone(), cache.clone());
    (service, store, cache)
}

pub fn draft(code: &str, name: &str) -> RecordDraft {
    RecordDraft {
        code: code.into(),
        name: name.into(),
        department: "Computer Science".into(),
        year: "2023".into(),
        grade: "Excellent".into(),
        status: RecordStatus::UnderReview,
        feedback: String::new(),
    }
}
