//! Interaction controller: the single intent-dispatch surface.
//!
//! # Responsibility
//! - Translate user intents into booking store operations.
//! - Describe the resulting overlay transitions, notices, and projection
//!   refreshes for the rendering surface to apply.
//!
//! # Invariants
//! - No intent mutates booking fields except through the store's `add` and
//!   `cancel`.
//! - Validation failures keep the form open and never block: they travel as
//!   values, not alerts.
//! - Persistence failures downgrade to a durability notice; the session
//!   keeps working on in-memory state.

use crate::model::booking::{BookingDraft, BookingId, BookingValidationError};
use crate::store::booking_store::{BookingStore, StoreError};
use crate::storage::SlotStore;
use crate::view::projector::{project, Projection};
use chrono::{Local, NaiveDate};
use log::info;
use std::fmt::{Display, Formatter};

/// User intents recognized by the dispatch surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Show the booking input overlay.
    OpenBookingForm,
    /// Show the read-only bookings overlay.
    OpenBookingsList,
    /// Create a booking from raw form fields.
    SubmitBooking {
        trainer: String,
        title: String,
        date: String,
    },
    /// Cancel one booking by id.
    CancelBooking { id: BookingId },
    /// Close any open overlay; no data side effects.
    DismissOverlay,
}

/// Overlays the rendering surface can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    BookingForm,
    BookingsList,
}

/// Overlay transition requested by a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Open(Overlay),
    Close,
}

/// Non-blocking user notice attached to a dispatch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Inline form feedback; the form stays open.
    InvalidBooking(BookingValidationError),
    /// The targeted booking does not exist.
    UnknownBooking(BookingId),
    /// The operation took effect in memory but was not persisted.
    DurabilityLost(String),
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBooking(err) => write!(f, "{err}"),
            Self::UnknownBooking(id) => write!(f, "booking {id} no longer exists"),
            Self::DurabilityLost(details) => {
                write!(f, "saved for this session only: {details}")
            }
        }
    }
}

/// Result of dispatching one intent.
///
/// `projection` is `Some` whenever the collection may have changed; the
/// rendering surface re-renders all three views from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub overlay: Option<OverlayAction>,
    pub notice: Option<Notice>,
    pub projection: Option<Projection>,
}

/// Controller owning the booking store on behalf of the composition root.
pub struct Controller<S: SlotStore> {
    store: BookingStore<S>,
}

impl<S: SlotStore> Controller<S> {
    pub fn new(store: BookingStore<S>) -> Self {
        Self { store }
    }

    /// Read access for surfaces that render outside the dispatch cycle.
    pub fn store(&self) -> &BookingStore<S> {
        &self.store
    }

    /// Projection for the initial render, before any intent arrives.
    pub fn startup_projection(&self, today: NaiveDate) -> Projection {
        project(self.store.all(), today)
    }

    /// Dispatches an intent against the wall clock.
    pub fn dispatch(&mut self, intent: Intent) -> Dispatch {
        self.dispatch_at(intent, Local::now().date_naive())
    }

    /// Dispatches an intent with an explicit `today`.
    ///
    /// Everything below the controller is deterministic; only `dispatch`
    /// reaches for the wall clock.
    pub fn dispatch_at(&mut self, intent: Intent, today: NaiveDate) -> Dispatch {
        match intent {
            Intent::OpenBookingForm => Dispatch {
                overlay: Some(OverlayAction::Open(Overlay::BookingForm)),
                ..Dispatch::default()
            },
            Intent::OpenBookingsList => Dispatch {
                overlay: Some(OverlayAction::Open(Overlay::BookingsList)),
                ..Dispatch::default()
            },
            Intent::DismissOverlay => Dispatch {
                overlay: Some(OverlayAction::Close),
                ..Dispatch::default()
            },
            Intent::SubmitBooking {
                trainer,
                title,
                date,
            } => self.submit_booking(BookingDraft::new(trainer, title, date), today),
            Intent::CancelBooking { id } => self.cancel_booking(id, today),
        }
    }

    fn submit_booking(&mut self, draft: BookingDraft, today: NaiveDate) -> Dispatch {
        match self.store.add(&draft) {
            Ok(booking) => {
                info!(
                    "event=intent_submit module=controller status=ok id={}",
                    booking.id
                );
                Dispatch {
                    overlay: Some(OverlayAction::Close),
                    notice: None,
                    projection: Some(project(self.store.all(), today)),
                }
            }
            Err(StoreError::Validation(err)) => {
                info!(
                    "event=intent_submit module=controller status=rejected reason=validation error={err}"
                );
                Dispatch {
                    // Form stays open so the user can fix the field inline.
                    overlay: None,
                    notice: Some(Notice::InvalidBooking(err)),
                    projection: None,
                }
            }
            Err(StoreError::Persistence(err)) => {
                // The booking exists in memory; close the form and warn.
                Dispatch {
                    overlay: Some(OverlayAction::Close),
                    notice: Some(Notice::DurabilityLost(err.to_string())),
                    projection: Some(project(self.store.all(), today)),
                }
            }
            Err(StoreError::NotFound(id)) => Dispatch {
                // add() never reports NotFound; kept total for the compiler.
                notice: Some(Notice::UnknownBooking(id)),
                ..Dispatch::default()
            },
        }
    }

    fn cancel_booking(&mut self, id: BookingId, today: NaiveDate) -> Dispatch {
        match self.store.cancel(id) {
            Ok(()) => Dispatch {
                overlay: None,
                notice: None,
                projection: Some(project(self.store.all(), today)),
            },
            Err(StoreError::NotFound(id)) => {
                info!(
                    "event=intent_cancel module=controller status=rejected reason=not_found id={id}"
                );
                Dispatch {
                    notice: Some(Notice::UnknownBooking(id)),
                    ..Dispatch::default()
                }
            }
            Err(StoreError::Persistence(err)) => Dispatch {
                notice: Some(Notice::DurabilityLost(err.to_string())),
                projection: Some(project(self.store.all(), today)),
                ..Dispatch::default()
            },
            Err(StoreError::Validation(err)) => Dispatch {
                // cancel() never reports Validation; kept total for the compiler.
                notice: Some(Notice::InvalidBooking(err)),
                ..Dispatch::default()
            },
        }
    }
}
