//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gymmate_core` linkage.
//! - Exercise one add/project cycle against an in-memory slot store.

use chrono::Local;
use gymmate_core::{open_slots_in_memory, BookingDraft, BookingStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("gymmate_core version={}", gymmate_core::core_version());

    let slots = open_slots_in_memory()?;
    let mut store = BookingStore::open(slots);

    let today = Local::now().date_naive();
    let draft = BookingDraft::new("Alex", "Intro session", today.format("%Y-%m-%d").to_string());
    let booking = store.add(&draft)?;
    println!("sample booking id={} date={}", booking.id, booking.date);

    let projection = gymmate_core::project(store.all(), today);
    println!(
        "kpi total={} upcoming={} canceled={}",
        projection.kpis.total, projection.kpis.upcoming, projection.kpis.canceled
    );

    Ok(())
}
