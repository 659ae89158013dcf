//! Full user journey through the table view.

use crate::test_utils::setup;
use gradbook::types::*;
use std::sync::Arc;

#[test]
fn test_full_session_seed_migrate_delete() {
    let (service, _store, _cache) = setup();
    let mut view = TableView::new(service, Arc::new(AlwaysConfirm));

    // Mount over an empty store.
    view.mount();
    assert_eq!(view.state().records().unwrap().len(), 0);
    assert!(view.render().contains("No records available"));

    // Seed the demonstration records.
    view.create_initial_data();
    assert_eq!(view.take_notice().unwrap().kind, NoticeKind::Success);
    assert_eq!(view.state().records().unwrap().len(), 2);

    // Seeding filled the cache too, so migration copies both again.
    view.migrate();
    let notice = view.take_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert!(notice.message.contains("Migrated 2 records"));
    assert_eq!(view.state().records().unwrap().len(), 4);

    // The rendered footer counts by status: one approved seed record
    // plus its approved duplicate.
    let rendered = view.render();
    assert!(rendered.contains("Total graduates: 4"));
    assert!(rendered.contains("Approved: 2 | Under Review: 2"));

    // Delete the newest record locally.
    let first = view.state().records().unwrap()[0].store_id.clone();
    view.delete_record(&first);
    assert_eq!(view.take_notice().unwrap().kind, NoticeKind::Success);
    assert_eq!(view.state().records().unwrap().len(), 3);

    // The edit affordance only formats; nothing changes.
    let second = view.state().records().unwrap()[0].store_id.clone();
    let details = view.inspect(&second).unwrap();
    assert!(details.starts_with("Edit: "));
    assert_eq!(view.state().records().unwrap().len(), 3);
}

#[test]
fn test_migrate_with_empty_cache_reports_no_local_data() {
    let (service, _store, _cache) = setup();
    let mut view = TableView::new(service, Arc::new(AlwaysConfirm));
    view.mount();

    view.migrate();

    let notice = view.take_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
    assert!(notice.message.contains("No records found in the local cache"));
}

#[test]
fn test_declined_confirmations_change_nothing() {
    let (service, store, _cache) = setup();
    let deny = |_: &str| false;
    let mut view = TableView::new(service, Arc::new(deny));
    view.mount();

    view.create_initial_data();

    assert!(view.take_notice().is_none());
    assert_eq!(store.count(GRADUATES_COLLECTION), 0);
    assert_eq!(view.state().records().unwrap().len(), 0);
}
