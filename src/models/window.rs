//! Booking-eligibility windows.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Hours before class start at which the portal opens reservations.
pub const OPENS_HOURS_BEFORE: i64 = 72;

/// Hours before class start at which the portal stops accepting them.
pub const CLOSES_HOURS_BEFORE: i64 = 1;

/// Half-open interval `[opens_at, closes_at)` during which a class occurrence
/// may be reserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookingWindow {
    pub opens_at: NaiveDateTime,
    pub closes_at: NaiveDateTime,
}

impl BookingWindow {
    /// Window for a concrete class occurrence: opens 72 hours before start,
    /// closes one hour before.
    pub fn for_occurrence(occurrence: NaiveDateTime) -> Self {
        Self {
            opens_at: occurrence - Duration::hours(OPENS_HOURS_BEFORE),
            closes_at: occurrence - Duration::hours(CLOSES_HOURS_BEFORE),
        }
    }

    /// Whether `instant` falls inside the window. Left-closed, right-open:
    /// the opening instant is in, the closing instant is out.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.opens_at <= instant && instant < self.closes_at
    }
}
