//! Presentation projections derived from the booking collection.
//!
//! # Responsibility
//! - Compute read-only view data (sidebar, dashboard, KPI counters).
//! - Keep all derivation pure: no storage access, no clock access.
//!
//! # Invariants
//! - Projections never mutate bookings and never feed back into the store.

pub mod countup;
pub mod projector;
