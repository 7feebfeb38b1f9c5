use chrono::NaiveDate;
use gymmate_core::{Booking, BookingDraft, BookingValidationError};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn from_draft_sets_defaults_and_trims_fields() {
    let draft = BookingDraft::new("  Alex ", " Morning Yoga  ", "2025-06-03");
    let booking = Booking::from_draft(&draft).unwrap();

    assert!(!booking.id.is_nil());
    assert_eq!(booking.trainer, "Alex");
    assert_eq!(booking.title, "Morning Yoga");
    assert_eq!(booking.date, date(2025, 6, 3));
    assert!(!booking.canceled);
    assert!(booking.is_active());
}

#[test]
fn from_draft_rejects_empty_fields_after_trimming() {
    let no_trainer = BookingDraft::new("   ", "Yoga", "2025-01-01");
    assert_eq!(
        Booking::from_draft(&no_trainer).unwrap_err(),
        BookingValidationError::EmptyTrainer
    );

    let no_title = BookingDraft::new("Alex", "", "2025-01-01");
    assert_eq!(
        Booking::from_draft(&no_title).unwrap_err(),
        BookingValidationError::EmptyTitle
    );

    let no_date = BookingDraft::new("Alex", "Yoga", "  ");
    assert_eq!(
        Booking::from_draft(&no_date).unwrap_err(),
        BookingValidationError::EmptyDate
    );
}

#[test]
fn from_draft_rejects_unparseable_dates() {
    let bad = BookingDraft::new("Alex", "Yoga", "03/06/2025");
    assert!(matches!(
        Booking::from_draft(&bad).unwrap_err(),
        BookingValidationError::InvalidDate(value) if value == "03/06/2025"
    ));
}

#[test]
fn cancel_is_idempotent_on_the_record() {
    let draft = BookingDraft::new("Alex", "Yoga", "2025-06-03");
    let mut booking = Booking::from_draft(&draft).unwrap();

    booking.cancel();
    assert!(booking.canceled);
    booking.cancel();
    assert!(booking.canceled);
    assert!(!booking.is_active());
}

#[test]
fn upcoming_window_is_inclusive_on_both_ends() {
    let today = date(2025, 6, 1);
    let mut booking = Booking::from_draft(&BookingDraft::new("A", "T", "2025-06-01")).unwrap();

    assert!(booking.is_upcoming(today, 7));

    booking.date = date(2025, 6, 8);
    assert!(booking.is_upcoming(today, 7));

    booking.date = date(2025, 6, 9);
    assert!(!booking.is_upcoming(today, 7));

    booking.date = date(2025, 5, 31);
    assert!(!booking.is_upcoming(today, 7));

    booking.date = date(2025, 6, 3);
    booking.cancel();
    assert!(!booking.is_upcoming(today, 7));
}

#[test]
fn booking_serialization_uses_expected_wire_fields() {
    let booking = Booking {
        id: Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap(),
        trainer: "Alex".to_string(),
        title: "Yoga".to_string(),
        date: date(2025, 6, 3),
        canceled: false,
    };

    let json = serde_json::to_value(&booking).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["trainer"], "Alex");
    assert_eq!(json["title"], "Yoga");
    assert_eq!(json["date"], "2025-06-03");
    assert_eq!(json["canceled"], false);

    let decoded: Booking = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, booking);
}
