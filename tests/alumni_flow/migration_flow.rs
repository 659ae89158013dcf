//! Cache-to-store migration flows.

use crate::test_utils::{draft, setup};
use gradbook::types::*;

#[test]
fn test_migrate_single_cached_record() {
    let (service, _store, cache) = setup();
    write_cached_records(cache.as_ref(), &[draft("1", "X")]).unwrap();

    let report = service.migrate().unwrap();
    assert_eq!(
        report,
        MigrationReport {
            migrated: 1,
            total: 1
        }
    );

    let records = service.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].code, "1");
    assert!(records[0].from_local_cache);
}

#[test]
fn test_migrate_empty_cache_is_zero_zero_with_no_writes() {
    let (service, store, _cache) = setup();

    let report = service.migrate().unwrap();
    assert_eq!(
        report,
        MigrationReport {
            migrated: 0,
            total: 0
        }
    );
    assert_eq!(store.count(GRADUATES_COLLECTION), 0);
}

#[test]
fn test_migrate_malformed_cache_is_silently_empty() {
    let (service, store, cache) = setup();
    cache.store("{ not a record array").unwrap();

    let report = service.migrate().unwrap();
    assert_eq!(
        report,
        MigrationReport {
            migrated: 0,
            total: 0
        }
    );
    assert_eq!(store.count(GRADUATES_COLLECTION), 0);
}

#[test]
fn test_migrate_twice_duplicates_every_code() {
    let (service, _store, cache) = setup();
    write_cached_records(cache.as_ref(), &[draft("1", "X"), draft("2", "Y")]).unwrap();

    service.migrate().unwrap();
    service.migrate().unwrap();

    let records = service.list().unwrap();
    assert_eq!(records.len(), 4);
    for code in ["1", "2"] {
        let matching: Vec<_> = records
            .iter()
            .filter(|record| record.code == code)
            .collect();
        assert_eq!(matching.len(), 2);
        assert_ne!(matching[0].store_id, matching[1].store_id);
    }
}

#[test]
fn test_seed_then_migrate_duplicates_with_provenance() {
    let (service, _store, cache) = setup();

    // Seeding fills the cache; migrating afterwards copies it again.
    service.create_initial_data().unwrap();
    assert_eq!(read_cached_records(cache.as_ref()).len(), 2);

    let report = service.migrate().unwrap();
    assert_eq!(report.migrated, 2);

    let records = service.list().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(
        records
            .iter()
            .filter(|record| record.from_local_cache)
            .count(),
        2
    );
}
