//! Add/list/delete flows against the public surface.

use crate::test_utils::{draft, setup};
use gradbook::types::*;

#[test]
fn test_seed_then_list_yields_the_two_demonstration_records() {
    let (service, _store, _cache) = setup();

    service.create_initial_data().unwrap();
    let records = service.list().unwrap();

    assert_eq!(records.len(), 2);
    // Newest first: Sara was added second.
    assert_eq!(records[0].name, "Sara Abdullah");
    assert_eq!(records[0].status, RecordStatus::UnderReview);
    assert_eq!(records[1].name, "Ahmed Mohamed");
    assert_eq!(records[1].status, RecordStatus::Approved);
    assert!(records.iter().all(|record| !record.from_local_cache));
}

#[test]
fn test_list_returns_later_insert_first() {
    let (service, _store, _cache) = setup();

    service.add(&draft("1", "A"), false).unwrap();
    service.add(&draft("2", "B"), false).unwrap();

    let records = service.list().unwrap();
    assert_eq!(records[0].name, "B");
    assert_eq!(records[1].name, "A");
    assert!(records[0].created_at >= records[1].created_at);
}

#[test]
fn test_delete_empty_id_is_invalid_argument() {
    let (service, _store, _cache) = setup();
    let err = service.delete(&DocumentId::new("")).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument { .. }));
}

#[test]
fn test_delete_then_list_shrinks() {
    let (service, _store, _cache) = setup();
    let id = service.add(&draft("1", "A"), false).unwrap();
    service.add(&draft("2", "B"), false).unwrap();

    service.delete(&id).unwrap();

    let records = service.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "B");
}

#[test]
fn test_unrecognized_status_reads_as_under_review() {
    let (service, store, _cache) = setup();

    // A document written by some other client with a status literal this
    // system does not use.
    let mut fields = Fields::new();
    fields.insert("code".into(), "9".into());
    fields.insert("name".into(), "Legacy".into());
    fields.insert("status".into(), "pending".into());
    store.create(GRADUATES_COLLECTION, fields).unwrap();

    let records = service.list().unwrap();
    assert_eq!(records[0].status, RecordStatus::UnderReview);
    assert_eq!(status_badge(records[0].status), "Under Review");
}
