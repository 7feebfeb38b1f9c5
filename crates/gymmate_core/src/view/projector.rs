//! View projector: pure read models for the three rendering surfaces.
//!
//! # Responsibility
//! - Derive the date-sorted sidebar list, the insertion-order dashboard
//!   table, and the KPI counters from one snapshot of the collection.
//!
//! # Invariants
//! - Sidebar sort is stable: equal dates keep insertion order.
//! - Dashboard order equals insertion order regardless of cancellation.
//! - KPI `upcoming` is recomputed from the caller-supplied `today` on every
//!   projection, never cached.

use crate::model::booking::{Booking, BookingId};
use crate::store::booking_store::UPCOMING_WINDOW_DAYS;
use chrono::NaiveDate;

/// One sidebar list entry, sorted by session date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub id: BookingId,
    pub title: String,
    pub trainer: String,
    pub date_label: String,
    /// Label for the cancel affordance. The affordance stays clickable even
    /// when canceled; a second click is a no-op downstream.
    pub action_label: &'static str,
}

/// Status badge shown on dashboard rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Active,
    Canceled,
}

impl StatusBadge {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Canceled => "Canceled",
        }
    }
}

/// One dashboard table row, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRow {
    pub id: BookingId,
    pub title: String,
    pub trainer: String,
    pub date_label: String,
    pub status: StatusBadge,
}

/// Aggregate counters for the KPI cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kpis {
    /// Collection size, canceled bookings included.
    pub total: usize,
    /// Active bookings inside the inclusive 7-day window from `today`.
    pub upcoming: usize,
    /// Bookings with the canceled flag set.
    pub canceled: usize,
}

/// Full presentation snapshot handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub sidebar: Vec<SidebarEntry>,
    pub dashboard: Vec<DashboardRow>,
    pub kpis: Kpis,
}

/// Derives all three views from the current collection.
///
/// Pure: the same `bookings` and `today` always produce the same projection.
pub fn project(bookings: &[Booking], today: NaiveDate) -> Projection {
    Projection {
        sidebar: project_sidebar(bookings),
        dashboard: project_dashboard(bookings),
        kpis: project_kpis(bookings, today),
    }
}

/// Full collection sorted ascending by date; ties keep insertion order.
pub fn project_sidebar(bookings: &[Booking]) -> Vec<SidebarEntry> {
    let mut by_date: Vec<&Booking> = bookings.iter().collect();
    // Vec::sort_by_key is stable, which is what keeps tie order == insertion order.
    by_date.sort_by_key(|booking| booking.date);

    by_date
        .into_iter()
        .map(|booking| SidebarEntry {
            id: booking.id,
            title: booking.title.clone(),
            trainer: booking.trainer.clone(),
            date_label: format_date(booking.date),
            action_label: if booking.canceled { "Canceled" } else { "Cancel" },
        })
        .collect()
}

/// Full collection in insertion order, one row per booking.
pub fn project_dashboard(bookings: &[Booking]) -> Vec<DashboardRow> {
    bookings
        .iter()
        .map(|booking| DashboardRow {
            id: booking.id,
            title: booking.title.clone(),
            trainer: booking.trainer.clone(),
            date_label: format_date(booking.date),
            status: if booking.canceled {
                StatusBadge::Canceled
            } else {
                StatusBadge::Active
            },
        })
        .collect()
}

/// Aggregate counters over the full collection.
pub fn project_kpis(bookings: &[Booking], today: NaiveDate) -> Kpis {
    Kpis {
        total: bookings.len(),
        upcoming: bookings
            .iter()
            .filter(|booking| booking.is_upcoming(today, UPCOMING_WINDOW_DAYS))
            .count(),
        canceled: bookings.iter().filter(|booking| booking.canceled).count(),
    }
}

/// Renders a calendar date as `<abbreviated month> <day>, <year>`,
/// e.g. `Jun 3, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::format_date;
    use chrono::NaiveDate;

    #[test]
    fn format_date_uses_abbreviated_month_without_day_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        assert_eq!(format_date(date), "Jun 3, 2025");

        let two_digit = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date(two_digit), "Dec 31, 2025");
    }
}
