//! Domain model for training-session bookings.
//!
//! # Responsibility
//! - Define the canonical booking record used by all core layers.
//! - Own creation-time validation of user-entered booking data.
//!
//! # Invariants
//! - Every booking is identified by a stable `BookingId`.
//! - Cancellation is a soft flag, never a removal from the collection.

pub mod booking;
