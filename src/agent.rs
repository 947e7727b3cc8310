//! Seam to the external booking automation.
//!
//! The scheduler's output is exactly one [`BookingPlan`] (or nothing). What
//! happens next — credential login, branch selection, the optional "next
//! week" navigation, the class tile, the booking overlay — is the job of a
//! [`BookingAgent`] implementation driving a real browser, which lives
//! outside this crate. The agent reports back one of the four outcomes the
//! portal's booking overlay can show.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::info;

use crate::models::ScheduleEntry;

/// Everything the automation needs to act on one active booking window.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPlan {
    pub entry: ScheduleEntry,
    /// Concrete start of the occurrence to book.
    pub occurrence: NaiveDateTime,
    /// Whether the occurrence is in the next calendar week, i.e. whether the
    /// portal's "next week" tab must be selected before locating the tile.
    pub next_week: bool,
}

/// The four states the portal's booking overlay can report for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Booking button present; the reservation was (or could be) placed.
    Bookable,
    /// The portal has not opened reservations for this occurrence yet.
    NotYetOpen,
    /// No spots left.
    Full,
    /// A reservation for this occurrence already exists.
    AlreadyBooked,
}

/// Executes a booking plan against the portal.
#[async_trait]
pub trait BookingAgent {
    async fn book(&self, plan: &BookingPlan) -> anyhow::Result<BookingOutcome>;
}

/// Agent that only logs what it would do. Used when running without a
/// browser driver, and as the safety default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunAgent;

#[async_trait]
impl BookingAgent for DryRunAgent {
    async fn book(&self, plan: &BookingPlan) -> anyhow::Result<BookingOutcome> {
        info!(
            class = %plan.entry,
            occurrence = %plan.occurrence,
            next_week = plan.next_week,
            "dry run: would book this class"
        );
        Ok(BookingOutcome::Bookable)
    }
}
