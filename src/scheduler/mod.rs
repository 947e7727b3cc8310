//! Booking-window scheduling core.
//!
//! Three pure functions over `(schedule, now)`:
//!
//! - [`next_occurrence`]: resolve a weekly entry to its next concrete start
//! - [`is_next_calendar_week`]: classify an occurrence against the
//!   Monday-to-Sunday week containing `now`
//! - [`find_active_booking`]: gate — which entry, if any, is currently inside
//!   its booking window
//!
//! One evaluation per invocation; the functions are total over well-formed
//! input and never return errors. "No active window" is the normal outcome,
//! reported as `None`.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::models::{BookingWindow, ScheduleEntry};

/// A schedule entry whose booking window contains the evaluation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveBooking {
    pub entry: ScheduleEntry,
    /// Concrete start of the class occurrence being booked.
    pub occurrence: NaiveDateTime,
    pub window: BookingWindow,
}

/// Next concrete start of `entry` strictly after `now`.
///
/// Finds the date with the matching weekday within the coming 0-6 days and
/// sets the entry's start time on it. If that candidate is not strictly in
/// the future (the class today already started, or starts exactly now),
/// advances exactly seven days.
pub fn next_occurrence(entry: &ScheduleEntry, now: NaiveDateTime) -> NaiveDateTime {
    let target = entry.day.num_days_from_sunday();
    let today = now.weekday().num_days_from_sunday();
    let days_ahead = (target + 7 - today) % 7;

    let candidate = (now.date() + Duration::days(days_ahead as i64))
        .and_time(entry.time.as_naive_time());

    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

/// Whether `occurrence` falls after the calendar week containing `now`.
///
/// A calendar week runs Monday 00:00:00.000 through Sunday 23:59:59.999
/// inclusive. Returns true iff `occurrence` is strictly after that Sunday's
/// end of day. Occurrences are always strictly in the future, so "not next
/// week" means "within the remainder of the current week".
pub fn is_next_calendar_week(occurrence: NaiveDateTime, now: NaiveDateTime) -> bool {
    let days_since_monday = now.weekday().num_days_from_monday() as i64;
    let week_start = (now.date() - Duration::days(days_since_monday)).and_time(NaiveTime::MIN);
    let week_end = week_start + Duration::days(7) - Duration::milliseconds(1);

    occurrence > week_end
}

/// First entry, in declared order, whose booking window contains `now`.
///
/// Short-circuits on the first hit; `None` when nothing is bookable right
/// now. The first-wins rule is the tie-break policy for schedules whose
/// windows overlap.
pub fn find_active_booking(
    schedule: &[ScheduleEntry],
    now: NaiveDateTime,
) -> Option<ActiveBooking> {
    for entry in schedule {
        let occurrence = next_occurrence(entry, now);
        let window = BookingWindow::for_occurrence(occurrence);
        debug!(
            class = %entry,
            occurrence = %occurrence,
            opens_at = %window.opens_at,
            closes_at = %window.closes_at,
            "checking booking window"
        );

        if window.contains(now) {
            return Some(ActiveBooking {
                entry: entry.clone(),
                occurrence,
                window,
            });
        }
    }
    None
}
