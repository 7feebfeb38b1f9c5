use chrono::NaiveDate;
use gymmate_core::{
    open_slots, open_slots_in_memory, BookingDraft, BookingStore, BookingValidationError,
    SlotStore, StorageError, StoreError,
};
use std::collections::HashSet;
use tempfile::tempdir;
use uuid::Uuid;

fn draft(trainer: &str, title: &str, date: &str) -> BookingDraft {
    BookingDraft::new(trainer, title, date)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Slot store double whose writes always fail.
struct FailingSlots;

impl SlotStore for FailingSlots {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::UnsupportedSchemaVersion {
            db_version: 99,
            latest_supported: 1,
        })
    }
}

#[test]
fn add_appends_in_insertion_order_and_returns_the_booking() {
    let mut store = BookingStore::open(open_slots_in_memory().unwrap());

    let first = store.add(&draft("Alex", "Yoga", "2025-06-03")).unwrap();
    let second = store.add(&draft("Sam", "Spin", "2025-06-01")).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].id, first.id);
    assert_eq!(store.all()[1].id, second.id);
    assert!(!first.canceled);
}

#[test]
fn add_generates_pairwise_distinct_ids() {
    let mut store = BookingStore::open(open_slots_in_memory().unwrap());

    let mut ids = HashSet::new();
    for n in 0..50 {
        let added = store
            .add(&draft("Alex", &format!("Session {n}"), "2025-06-03"))
            .unwrap();
        ids.insert(added.id);
    }

    assert_eq!(ids.len(), 50);
}

#[test]
fn validation_failure_leaves_the_store_untouched() {
    let mut store = BookingStore::open(open_slots_in_memory().unwrap());

    let err = store.add(&draft("", "x", "2025-01-01")).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(BookingValidationError::EmptyTrainer)
    ));
    assert!(store.is_empty());
}

#[test]
fn cancel_sets_the_flag_and_is_idempotent() {
    let mut store = BookingStore::open(open_slots_in_memory().unwrap());
    let booking = store.add(&draft("Alex", "Yoga", "2025-06-03")).unwrap();

    store.cancel(booking.id).unwrap();
    store.cancel(booking.id).unwrap();

    let canceled = store.get(booking.id).unwrap();
    assert!(canceled.canceled);
    assert_eq!(store.len(), 1);
}

#[test]
fn cancel_of_unknown_id_reports_not_found() {
    let mut store = BookingStore::open(open_slots_in_memory().unwrap());
    let ghost = Uuid::new_v4();

    let err = store.cancel(ghost).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == ghost));
}

#[test]
fn canceled_bookings_stay_in_the_collection() {
    let mut store = BookingStore::open(open_slots_in_memory().unwrap());

    let a = store.add(&draft("Alex", "Yoga", "2025-06-03")).unwrap();
    let b = store.add(&draft("Sam", "Spin", "2025-06-05")).unwrap();
    store.cancel(a.id).unwrap();

    let order: Vec<_> = store.all().iter().map(|booking| booking.id).collect();
    assert_eq!(order, vec![a.id, b.id]);
}

#[test]
fn upcoming_filters_by_window_and_cancellation() {
    let mut store = BookingStore::open(open_slots_in_memory().unwrap());
    let today = date(2025, 6, 1);

    let boundary = store.add(&draft("Alex", "Boundary", "2025-06-08")).unwrap();
    store.add(&draft("Sam", "Past window", "2025-06-09")).unwrap();
    let canceled = store.add(&draft("Mia", "Canceled", "2025-06-03")).unwrap();
    store.cancel(canceled.id).unwrap();

    let upcoming: Vec<_> = store
        .upcoming(today, 7)
        .into_iter()
        .map(|booking| booking.id)
        .collect();

    assert_eq!(upcoming, vec![boundary.id]);
    assert_eq!(store.len(), 3);
}

#[test]
fn persistence_failure_keeps_the_in_memory_mutation() {
    let mut store = BookingStore::open(FailingSlots);

    let err = store.add(&draft("Alex", "Yoga", "2025-06-03")).unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));

    // The booking survived in memory for the rest of the session.
    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].trainer, "Alex");
}

#[test]
fn end_to_end_add_cancel_reload_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gymmate.db3");

    let id = {
        let mut store = BookingStore::open(open_slots(&path).unwrap());
        assert!(store.is_empty());

        let added = store.add(&draft("Alex", "Yoga", "2025-06-03")).unwrap();
        assert_eq!(store.len(), 1);

        store.cancel(added.id).unwrap();
        added.id
    };

    let reloaded = BookingStore::open(open_slots(&path).unwrap());
    assert_eq!(reloaded.len(), 1);
    let booking = reloaded.get(id).unwrap();
    assert_eq!(booking.trainer, "Alex");
    assert_eq!(booking.title, "Yoga");
    assert_eq!(booking.date, date(2025, 6, 3));
    assert!(booking.canceled);
}
