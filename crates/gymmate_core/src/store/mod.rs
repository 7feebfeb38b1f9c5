//! In-memory booking collection and its mutation entry points.

pub mod booking_store;
