// Test fixtures - reusable test data
// Provides consistent events across the integration test files

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rust_timetable::models::event::Event;

/// Feb 29, 2024, the day every fixture event lives on
pub fn leap_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
}

/// Local time on the leap day
pub fn at(hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 2, 29, hour, minute, 0)
        .single()
        .unwrap()
}

/// Local time on the leap day from minutes since midnight
pub fn at_minute(minute: u32) -> DateTime<Local> {
    at(minute / 60, minute % 60)
}

pub fn event(id: &str, start: (u32, u32), end: (u32, u32)) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {}", id),
        start: at(start.0, start.1),
        end: at(end.0, end.1),
        color: None,
    }
}

/// The busy afternoon from the demo app: a long meeting, a class that ends
/// exactly when two short events begin, and a lone evening event.
pub fn sample_day() -> Vec<Event> {
    vec![
        Event {
            color: Some("#FF5733".to_string()),
            ..event("1", (12, 0), (18, 0))
        },
        Event {
            color: Some("#33B5FF".to_string()),
            ..event("2", (12, 0), (13, 15))
        },
        Event {
            color: Some("#FF0000".to_string()),
            ..event("3", (13, 15), (14, 0))
        },
        event("4", (13, 15), (14, 0)),
        Event {
            color: Some("orange".to_string()),
            ..event("5", (20, 0), (22, 0))
        },
    ]
}
