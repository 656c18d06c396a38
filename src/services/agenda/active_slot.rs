//! Active and current hour resolution.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike};

use crate::models::settings::DEFAULT_ACTIVE_HOUR;

/// Which hour bucket is anchored and which one holds "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSlot {
    pub is_today: bool,
    pub active_hour: u32,
    pub current_hour: Option<u32>,
}

impl ActiveSlot {
    pub fn is_active(&self, hour: u32) -> bool {
        self.active_hour == hour
    }

    pub fn is_current(&self, hour: u32) -> bool {
        self.current_hour == Some(hour)
    }
}

/// Request to bring one hour bucket into view.
///
/// Emitted on every render, not only when the target changes, so the
/// presentation layer must treat it as idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoScrollRequest {
    pub date: NaiveDate,
    pub hour: u32,
}

impl AutoScrollRequest {
    pub fn matches_hour(&self, date: NaiveDate, hour: u32) -> bool {
        self.date == date && self.hour == hour
    }
}

/// Resolve with the standard 07:00 anchor for days other than today.
pub fn resolve<Tz: TimeZone>(reference: NaiveDate, now: &DateTime<Tz>) -> ActiveSlot {
    resolve_with_default(reference, now, DEFAULT_ACTIVE_HOUR)
}

/// Compare the viewed date with the civil day of `now` in `now`'s zone.
pub fn resolve_with_default<Tz: TimeZone>(
    reference: NaiveDate,
    now: &DateTime<Tz>,
    default_hour: u32,
) -> ActiveSlot {
    if now.date_naive() == reference {
        let hour = now.hour();
        ActiveSlot {
            is_today: true,
            active_hour: hour,
            current_hour: Some(hour),
        }
    } else {
        ActiveSlot {
            is_today: false,
            active_hour: default_hour.min(23),
            current_hour: None,
        }
    }
}
