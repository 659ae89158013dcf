//! Record-level access to the cache slot.
//!
//! The slot payload is a JSON array of flat records. Reading never fails:
//! every failure mode collapses to an empty sequence with a `warn` log,
//! so stale or hand-edited cache contents can't take the application
//! down. Writing propagates failures normally.

use crate::{CacheResult, CacheSlot};
use gradbook_core::RecordDraft;

/// Read all records from the slot.
///
/// Returns an empty vector when the slot is absent, empty, unreadable,
/// or holds a payload that does not parse as a record array. None of
/// these is reported to the caller; the failure is logged on the
/// `gradbook::cache` target only.
pub fn read_cached_records(slot: &dyn CacheSlot) -> Vec<RecordDraft> {
    let payload = match slot.load() {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(
                target: "gradbook::cache",
                error = %err,
                "cache slot unreadable, treating as empty"
            );
            return Vec::new();
        }
    };

    if payload.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<RecordDraft>>(&payload) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(
                target: "gradbook::cache",
                error = %err,
                "cache payload malformed, treating as empty"
            );
            Vec::new()
        }
    }
}

/// Overwrite the slot with the given records.
pub fn write_cached_records(slot: &dyn CacheSlot, records: &[RecordDraft]) -> CacheResult<()> {
    let payload = serde_json::to_string(records)?;
    slot.store(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySlot;
    use gradbook_core::RecordStatus;

    fn draft(code: &str) -> RecordDraft {
        RecordDraft {
            code: code.into(),
            name: "X".into(),
            department: "CS".into(),
            year: "2023".into(),
            grade: "A".into(),
            status: RecordStatus::default(),
            feedback: String::new(),
        }
    }

    #[test]
    fn test_absent_slot_reads_empty() {
        let slot = MemorySlot::new();
        assert!(read_cached_records(&slot).is_empty());
    }

    #[test]
    fn test_blank_payload_reads_empty() {
        let slot = MemorySlot::with_payload("   ");
        assert!(read_cached_records(&slot).is_empty());
    }

    #[test]
    fn test_malformed_payload_reads_empty() {
        let slot = MemorySlot::with_payload("not json {");
        assert!(read_cached_records(&slot).is_empty());
    }

    #[test]
    fn test_wrong_shape_reads_empty() {
        // An object rather than an array of records.
        let slot = MemorySlot::with_payload(r#"{"code":"1"}"#);
        assert!(read_cached_records(&slot).is_empty());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let slot = MemorySlot::new();
        write_cached_records(&slot, &[draft("1"), draft("2")]).unwrap();
        let records = read_cached_records(&slot);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code, "1");
        assert_eq!(records[1].code, "2");
    }

    #[test]
    fn test_reads_legacy_numeric_year() {
        let slot = MemorySlot::with_payload(
            r#"[{"code":"1","name":"X","department":"CS","year":2023,"grade":"A"}]"#,
        );
        let records = read_cached_records(&slot);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, "2023");
    }
}
