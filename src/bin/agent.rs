//! Booking Agent Binary
//!
//! One evaluation per invocation: load the configuration, read the clock,
//! find the class (if any) whose booking window is open right now, and hand
//! it to the booking agent. Intended to be run periodically by an external
//! scheduler such as cron.
//!
//! # Usage
//!
//! ```bash
//! # Config from ./booking.toml (or ../booking.toml)
//! GYM_USERNAME=... GYM_PASSWORD=... cargo run --bin booking-agent
//!
//! # Explicit config path
//! cargo run --bin booking-agent -- /etc/class-booker/booking.toml
//! ```
//!
//! # Environment Variables
//!
//! - `GYM_USERNAME` / `GYM_PASSWORD`: portal credentials (names are
//!   overridable in the `[portal]` config section)
//! - `RUST_LOG`: log level (default: info)

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use class_booker::agent::{BookingAgent, BookingOutcome, BookingPlan, DryRunAgent};
use class_booker::clock::{Clock, SystemClock};
use class_booker::config::AppConfig;
use class_booker::scheduler::{find_active_booking, is_next_calendar_week};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting booking agent");

    let config = match env::args().nth(1) {
        Some(path) => AppConfig::from_file(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => AppConfig::from_default_location().context("loading config")?,
    };
    let schedule = config.schedule().context("validating class schedule")?;

    // Fail fast on missing credentials before touching the portal.
    let credentials = config.portal.credentials()?;
    info!(
        branch = %config.portal.branch,
        user = %credentials.username,
        classes = schedule.len(),
        "configuration loaded"
    );

    let now = SystemClock.now();
    info!(%now, "checking schedule for classes to book");

    let Some(active) = find_active_booking(&schedule, now) else {
        info!("no classes are within their booking window right now");
        return Ok(());
    };

    let plan = BookingPlan {
        next_week: is_next_calendar_week(active.occurrence, now),
        entry: active.entry,
        occurrence: active.occurrence,
    };
    info!(
        class = %plan.entry,
        occurrence = %plan.occurrence,
        next_week = plan.next_week,
        "booking window is open"
    );

    let outcome = DryRunAgent.book(&plan).await?;
    match outcome {
        BookingOutcome::Bookable => info!("class is available for booking"),
        BookingOutcome::NotYetOpen => info!("portal has not opened booking for this class yet"),
        BookingOutcome::Full => info!("class is full"),
        BookingOutcome::AlreadyBooked => info!("class is already booked"),
    }

    Ok(())
}
