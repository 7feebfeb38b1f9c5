//! Core domain logic for GymMate bookings.
//! This crate is the single source of truth for booking invariants.

pub mod controller;
pub mod logging;
pub mod model;
pub mod repo;
pub mod storage;
pub mod store;
pub mod view;

pub use controller::{Controller, Dispatch, Intent, Notice, Overlay, OverlayAction};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::booking::{Booking, BookingDraft, BookingId, BookingValidationError};
pub use repo::booking_archive::{ArchiveError, BookingArchive, BOOKINGS_SLOT_KEY};
pub use storage::{open_slots, open_slots_in_memory, SlotStore, SqliteSlotStore, StorageError};
pub use store::booking_store::{BookingStore, StoreError, UPCOMING_WINDOW_DAYS};
pub use view::countup::CountUp;
pub use view::projector::{project, Kpis, Projection, StatusBadge};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
