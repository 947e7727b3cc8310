//! End-to-end evaluation through the public API: config text -> schedule ->
//! gate -> booking plan, with the clock pinned to known instants.

use chrono::{NaiveDate, NaiveDateTime};

use class_booker::agent::BookingPlan;
use class_booker::clock::{Clock, FixedClock};
use class_booker::config::AppConfig;
use class_booker::scheduler::{find_active_booking, is_next_calendar_week};

const CONFIG: &str = r#"
[portal]
login_url = "https://example.test/member/login.aspx"
branch = "Arena Yoga & Fitness"

[[class]]
day = "tue"
time = "12:10"
name = "BODYCOMBAT"
room = "Studio A"

[[class]]
day = "sat"
time = "02:45"
name = "BODYCOMBAT"
room = "Studio A"

[[class]]
day = "sun"
time = "01:30"
name = "BODYJAM"
room = "Studio A"
"#;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn schedule() -> Vec<class_booker::models::ScheduleEntry> {
    let config: AppConfig = toml::from_str(CONFIG).unwrap();
    config.schedule().unwrap()
}

#[test]
fn evaluation_with_no_open_window() {
    // Tuesday 11:30 sits inside the last hour before the Tuesday class
    // (window already closed) and before the weekend windows open.
    let clock = FixedClock::new(at(2025, 9, 2, 11, 30));
    assert!(find_active_booking(&schedule(), clock.now()).is_none());
}

#[test]
fn evaluation_selects_saturday_class_and_flags_same_week() {
    // Thursday 03:00: the Saturday 02:45 window (opened Wednesday 02:45)
    // is the only active one, and Saturday is still this calendar week.
    let clock = FixedClock::new(at(2025, 9, 4, 3, 0));
    let active = find_active_booking(&schedule(), clock.now()).expect("saturday window open");
    assert_eq!(active.entry.name, "BODYCOMBAT");
    assert_eq!(active.occurrence, at(2025, 9, 6, 2, 45));
    assert!(!is_next_calendar_week(active.occurrence, clock.now()));
}

#[test]
fn evaluation_selects_tuesday_class_and_flags_next_week() {
    // Saturday 13:00: the Tuesday 12:10 window opened at 12:10 today, and
    // Tuesday belongs to the next Monday-to-Sunday week.
    let clock = FixedClock::new(at(2025, 9, 6, 13, 0));
    let active = find_active_booking(&schedule(), clock.now()).expect("tuesday window open");
    assert_eq!(active.occurrence, at(2025, 9, 9, 12, 10));

    let plan = BookingPlan {
        next_week: is_next_calendar_week(active.occurrence, clock.now()),
        entry: active.entry,
        occurrence: active.occurrence,
    };
    assert!(plan.next_week);
}

#[test]
fn evaluation_is_stable_for_a_fixed_clock() {
    let clock = FixedClock::new(at(2025, 9, 4, 3, 0));
    let first = find_active_booking(&schedule(), clock.now());
    let second = find_active_booking(&schedule(), clock.now());
    assert_eq!(first, second);
}
