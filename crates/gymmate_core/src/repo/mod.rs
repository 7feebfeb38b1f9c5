//! Persistence adapters between domain records and slot storage.

pub mod booking_archive;
