//! Injectable wall-clock abstraction.
//!
//! The scheduler works on local wall time (the portal displays and books
//! classes in the gym's local timezone). Hiding the clock behind a trait lets
//! tests pin `now` to exact boundary instants instead of relying on the
//! system clock.

use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock instant.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant. Intended for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
