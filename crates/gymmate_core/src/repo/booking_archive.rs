//! Persistence adapter for the booking collection.
//!
//! # Responsibility
//! - Serialize the whole booking collection into one JSON document and
//!   write it to the named slot.
//! - Read the slot back, tolerating a missing or malformed payload.
//!
//! # Invariants
//! - Loading never errors to the caller: absent or unparseable data yields
//!   an empty collection.
//! - Saving always rewrites the complete collection; there is no delta
//!   persistence. Acceptable only at single-user collection sizes.

use crate::model::booking::Booking;
use crate::storage::{SlotStore, StorageError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key the collection lives under.
///
/// Matches the key used by earlier deployments, so their payloads load
/// unchanged.
pub const BOOKINGS_SLOT_KEY: &str = "gymmateBookings";

pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Error for durable booking writes.
///
/// Read-side failures never surface here; `load` recovers from them.
#[derive(Debug)]
pub enum ArchiveError {
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for ArchiveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize bookings: {err}"),
        }
    }
}

impl Error for ArchiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for ArchiveError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for ArchiveError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-collection archive over a slot store.
pub struct BookingArchive<S: SlotStore> {
    slots: S,
}

impl<S: SlotStore> BookingArchive<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Loads the persisted collection, preserving its stored order.
    ///
    /// # Contract
    /// - A missing slot (first run) yields an empty collection.
    /// - Storage or deserialization failures are logged and yield an empty
    ///   collection; startup never fails on bad persisted data.
    pub fn load(&self) -> Vec<Booking> {
        let raw = match self.slots.get(BOOKINGS_SLOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=archive_load module=repo status=ok outcome=empty_slot");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=archive_load module=repo status=error error_code=slot_read_failed error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Booking>>(&raw) {
            Ok(bookings) => {
                debug!(
                    "event=archive_load module=repo status=ok count={}",
                    bookings.len()
                );
                bookings
            }
            Err(err) => {
                warn!(
                    "event=archive_load module=repo status=error error_code=malformed_payload error={err}"
                );
                Vec::new()
            }
        }
    }

    /// Serializes and overwrites the full collection in the slot.
    ///
    /// Failure leaves the previous slot content intact; the caller's
    /// in-memory state is never touched from here.
    pub fn save(&self, bookings: &[Booking]) -> ArchiveResult<()> {
        let payload = serde_json::to_string(bookings)?;
        self.slots.set(BOOKINGS_SLOT_KEY, &payload)?;
        debug!(
            "event=archive_save module=repo status=ok count={}",
            bookings.len()
        );
        Ok(())
    }
}
