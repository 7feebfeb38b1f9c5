//! Booking store: the single owner of the booking collection.
//!
//! # Responsibility
//! - Hold the process-resident ordered collection of bookings.
//! - Provide the only mutation entry points (`add`, `cancel`).
//! - Trigger exactly one archive save per successful mutation.
//!
//! # Invariants
//! - Insertion order of the collection is never reordered.
//! - Bookings are only constructed here and only mutated here.
//! - A `Validation` error means the collection was not touched.
//! - A `Persistence` error means the in-memory mutation was applied but the
//!   durable write failed; the session state stays correct.

use crate::model::booking::{Booking, BookingDraft, BookingId, BookingValidationError};
use crate::repo::booking_archive::{ArchiveError, BookingArchive};
use crate::storage::SlotStore;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive window used for the "upcoming" KPI.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for booking store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Draft input was rejected; nothing changed.
    Validation(BookingValidationError),
    /// No booking carries the given id.
    NotFound(BookingId),
    /// The mutation was applied in memory but could not be persisted.
    Persistence(ArchiveError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "booking not found: {id}"),
            Self::Persistence(err) => write!(f, "booking kept in memory but not persisted: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<BookingValidationError> for StoreError {
    fn from(value: BookingValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Owner of the in-memory booking collection, generic over slot storage.
pub struct BookingStore<S: SlotStore> {
    bookings: Vec<Booking>,
    archive: BookingArchive<S>,
}

impl<S: SlotStore> BookingStore<S> {
    /// Opens the store, loading any previously persisted collection.
    ///
    /// Load is fail-soft: a missing or unreadable slot starts an empty
    /// session rather than failing startup.
    pub fn open(slots: S) -> Self {
        let archive = BookingArchive::new(slots);
        let bookings = archive.load();
        info!(
            "event=store_open module=store status=ok count={}",
            bookings.len()
        );
        Self { bookings, archive }
    }

    /// Creates a booking from draft input and appends it to the collection.
    ///
    /// # Contract
    /// - Validation failures leave the collection untouched.
    /// - On success the full post-mutation collection is persisted once and
    ///   a clone of the new booking is returned.
    /// - `Persistence` errors mean the booking exists in memory; callers
    ///   should surface a durability warning, not discard the booking.
    pub fn add(&mut self, draft: &BookingDraft) -> StoreResult<Booking> {
        let booking = Booking::from_draft(draft)?;
        self.bookings.push(booking.clone());
        info!(
            "event=booking_add module=store status=ok id={} date={}",
            booking.id, booking.date
        );

        self.persist()?;
        Ok(booking)
    }

    /// Cancels the booking with the given id.
    ///
    /// # Contract
    /// - Unknown ids return `StoreError::NotFound`.
    /// - Canceling an already-canceled booking is a no-op with no second
    ///   save.
    pub fn cancel(&mut self, id: BookingId) -> StoreResult<()> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if booking.canceled {
            debug!("event=booking_cancel module=store status=ok id={id} outcome=already_canceled");
            return Ok(());
        }

        booking.cancel();
        info!("event=booking_cancel module=store status=ok id={id}");

        self.persist()
    }

    /// Read-only view of the collection in insertion order.
    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    /// Looks up one booking by id.
    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|booking| booking.id == id)
    }

    /// Active bookings inside the inclusive `[today, today + window_days]`
    /// window, in insertion order.
    pub fn upcoming(&self, today: NaiveDate, window_days: u64) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.is_upcoming(today, window_days))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    fn persist(&self) -> StoreResult<()> {
        if let Err(err) = self.archive.save(&self.bookings) {
            warn!(
                "event=booking_persist module=store status=error error_code=save_failed error={err}"
            );
            return Err(StoreError::Persistence(err));
        }
        Ok(())
    }
}
