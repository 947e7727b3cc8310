//! Schedule entries and time-of-day handling.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for schedule input.
///
/// These are configuration errors: they surface at startup when the schedule
/// is built, never during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid time of day {0:?}: expected HH:MM with hour 0-23 and minute 0-59")]
    InvalidTime(String),
    #[error("unknown day of week {0:?}: expected a full or three-letter English day name")]
    InvalidDay(String),
}

/// Wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Create a validated time of day.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime(format!("{hour}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Convert to a chrono time at second zero.
    pub fn as_naive_time(&self) -> NaiveTime {
        // Invariant: hour/minute were range-checked in `new`.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// Parse an "HH:MM" string such as "12:10".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTime(s.to_string());
        let (hour_str, minute_str) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
        let minute: u32 = minute_str.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a day-of-week name, accepting full and three-letter English forms
/// in any case ("Tuesday", "tue", "SAT", ...).
pub fn parse_weekday(s: &str) -> Result<Weekday, ScheduleError> {
    match s.trim().to_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        "sunday" | "sun" => Ok(Weekday::Sun),
        _ => Err(ScheduleError::InvalidDay(s.to_string())),
    }
}

/// One recurring weekly class.
///
/// Entries are built from configuration at startup and never mutated. The
/// declared order matters: when two entries have overlapping booking windows,
/// the first one in the schedule wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day of week the class recurs on.
    pub day: Weekday,
    /// Class start time (local wall clock).
    pub time: TimeOfDay,
    /// Class name as shown on the portal's class tile.
    pub name: String,
    /// Classroom, when the portal splits the timetable per room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl ScheduleEntry {
    pub fn new(day: Weekday, time: TimeOfDay, name: impl Into<String>) -> Self {
        Self {
            day,
            time,
            name: name.into(),
            room: None,
        }
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.day, self.time)
    }
}
