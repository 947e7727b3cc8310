//! # Class Booker
//!
//! Booking-window scheduler for a recurring weekly gym class.
//!
//! The gym portal opens reservations for each class 72 hours before it starts
//! and closes them one hour before. This crate decides, for a static weekly
//! schedule and the current wall-clock instant, whether any class is currently
//! inside its booking window and whether that class falls in the next calendar
//! week (the portal shows one Monday-to-Sunday week at a time, so the answer
//! drives a "next week" navigation step in the automation layer).
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Schedule entries, time-of-day parsing, and booking windows
//! - [`clock`]: Injectable wall-clock abstraction for deterministic testing
//! - [`scheduler`]: Occurrence resolution, week classification, window gating
//! - [`config`]: TOML configuration loading and startup validation
//! - [`agent`]: Seam to the external browser-automation collaborator
//!
//! The scheduler is a set of pure functions: one evaluation per invocation,
//! no retries, no shared state. Side effects (login, navigation, the actual
//! reservation) belong entirely to the [`agent`] implementation.

pub mod agent;
pub mod clock;
pub mod config;
pub mod models;
pub mod scheduler;
