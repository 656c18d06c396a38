// Test fixtures - reusable test data
// Provides consistent dates, zones and items across the integration tests

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;

use notes_agenda::models::item::ScheduledItem;
use notes_agenda::models::note::{Note, NoteKind};
use notes_agenda::services::agenda::slot_grid::slot_timestamp;

/// Zone the scenarios are written in
pub const ZONE: Tz = chrono_tz::Europe::London;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday, March 15 2024
    pub fn friday_2024_03_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Sunday, March 10 2024
    pub fn sunday_2024_03_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// 2024-03-15 14:40 in [`ZONE`]
    pub fn friday_afternoon() -> DateTime<Tz> {
        ZONE.with_ymd_and_hms(2024, 3, 15, 14, 40, 0).unwrap()
    }
}

/// Sample items for testing
pub mod items {
    use super::*;

    /// Event at `hour:minute` on the Friday
    pub fn on_friday(hour: u32, minute: u32, body: &str) -> ScheduledItem<Tz> {
        ScheduledItem::event(body, slot_timestamp(dates::friday_2024_03_15(), hour, minute, &ZONE))
    }

    pub fn standup() -> ScheduledItem<Tz> {
        on_friday(9, 15, "standup")
    }

    pub fn backlog(body: &str) -> ScheduledItem<Tz> {
        ScheduledItem::new(body, NoteKind::Note)
    }
}

/// Store records as the notes API returns them
pub mod notes {
    use super::*;

    pub fn event(id: &str, body: &str, start: &str) -> Note {
        Note {
            id: Some(id.to_string()),
            body: body.to_string(),
            start: Some(start.to_string()),
            kind: NoteKind::Event,
        }
    }

    pub fn workspace(id: &str, body: &str) -> Note {
        Note {
            id: Some(id.to_string()),
            body: body.to_string(),
            start: None,
            kind: NoteKind::Workspace,
        }
    }
}
