//! Core data model for the weekly class schedule.

pub mod schedule;
pub mod window;

pub use schedule::{parse_weekday, ScheduleEntry, ScheduleError, TimeOfDay};
pub use window::BookingWindow;
