//! Booking domain model.
//!
//! # Responsibility
//! - Define the canonical booking record persisted in the durable slot.
//! - Validate raw form input before a booking may exist.
//! - Provide lifecycle helpers for the cancel-is-terminal transition.
//!
//! # Invariants
//! - `id` is stable and never reused for another booking.
//! - `canceled` only ever transitions `false -> true`.
//! - `trainer` and `title` are trimmed and non-empty once constructed.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a booking.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookingId = Uuid;

/// Canonical record of a reserved training session.
///
/// The wire shape (field names, ISO-8601 `date`, hyphenated `id`) matches the
/// payload historically stored under the `gymmateBookings` slot, so existing
/// persisted data deserializes unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Stable global ID; the sole lookup key for cancellation.
    pub id: BookingId,
    /// Trainer display name, trimmed and non-empty.
    pub trainer: String,
    /// Session title, trimmed and non-empty.
    pub title: String,
    /// Calendar date of the session. No time-of-day semantics.
    pub date: NaiveDate,
    /// Soft cancellation flag. Canceled bookings stay in the collection.
    pub canceled: bool,
}

/// Raw booking form input, exactly as the user entered it.
///
/// `date` stays a string here: parse failures are a validation concern, not
/// a reason for the input surface to hold a half-typed `NaiveDate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub trainer: String,
    pub title: String,
    pub date: String,
}

/// Validation error for booking creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingValidationError {
    /// Trainer is empty after trimming.
    EmptyTrainer,
    /// Title is empty after trimming.
    EmptyTitle,
    /// Date field is empty after trimming.
    EmptyDate,
    /// Date field is present but not a calendar date.
    InvalidDate(String),
}

impl Display for BookingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTrainer => write!(f, "trainer must not be empty"),
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyDate => write!(f, "date must not be empty"),
            Self::InvalidDate(value) => {
                write!(f, "`{value}` is not a valid calendar date (expected YYYY-MM-DD)")
            }
        }
    }
}

impl Error for BookingValidationError {}

impl BookingDraft {
    /// Creates a draft from raw field values.
    pub fn new(
        trainer: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            trainer: trainer.into(),
            title: title.into(),
            date: date.into(),
        }
    }
}

impl Booking {
    /// Builds a booking from validated draft input with a generated stable ID.
    ///
    /// # Contract
    /// - `trainer` and `title` are trimmed; empty results are rejected.
    /// - `date` must be an ISO-8601 calendar date (`YYYY-MM-DD`).
    /// - The new booking starts with `canceled = false`.
    pub fn from_draft(draft: &BookingDraft) -> Result<Self, BookingValidationError> {
        let trainer = draft.trainer.trim();
        if trainer.is_empty() {
            return Err(BookingValidationError::EmptyTrainer);
        }

        let title = draft.title.trim();
        if title.is_empty() {
            return Err(BookingValidationError::EmptyTitle);
        }

        let date_text = draft.date.trim();
        if date_text.is_empty() {
            return Err(BookingValidationError::EmptyDate);
        }
        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
            .map_err(|_| BookingValidationError::InvalidDate(date_text.to_string()))?;

        Ok(Self {
            id: Uuid::new_v4(),
            trainer: trainer.to_string(),
            title: title.to_string(),
            date,
            canceled: false,
        })
    }

    /// Marks this booking as canceled. Idempotent.
    pub fn cancel(&mut self) {
        self.canceled = true;
    }

    /// Returns whether this booking still counts as active.
    pub fn is_active(&self) -> bool {
        !self.canceled
    }

    /// Returns whether this booking falls inside the inclusive window
    /// `[today, today + window_days]` and is still active.
    pub fn is_upcoming(&self, today: NaiveDate, window_days: u64) -> bool {
        if self.canceled || self.date < today {
            return false;
        }
        match today.checked_add_days(Days::new(window_days)) {
            Some(window_end) => self.date <= window_end,
            // Window end past the calendar range means no upper bound.
            None => true,
        }
    }
}
