//! Fixed partition of a civil day into hour buckets and quarter slots.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::ops::Range;

use crate::utils::date::resolve_local;

pub const HOURS_PER_DAY: u32 = 24;
pub const SLOT_INTERVAL: u32 = 15;
pub const SLOTS_PER_HOUR: usize = 4;
pub const QUARTER_OFFSETS: [u32; SLOTS_PER_HOUR] = [0, 15, 30, 45];

/// Hour bucket indices, 0 through 23.
pub fn hour_buckets() -> Range<u32> {
    0..HOURS_PER_DAY
}

/// Minute offsets of the quarter slots within an hour.
pub fn quarter_offsets() -> [u32; SLOTS_PER_HOUR] {
    QUARTER_OFFSETS
}

/// Wall-clock time of a slot on `date`. Hour and minute are clamped to 23:59.
pub fn slot_wall_time(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(hour.min(HOURS_PER_DAY - 1), minute.min(59), 0)
        .unwrap_or(NaiveTime::MIN);
    date.and_time(time)
}

/// Exact instant of a slot on `date` in `tz`.
pub fn slot_timestamp<Tz: TimeZone>(
    date: NaiveDate,
    hour: u32,
    minute: u32,
    tz: &Tz,
) -> DateTime<Tz> {
    resolve_local(tz, slot_wall_time(date, hour, minute))
}

/// "HH:mm" label of an hour bucket.
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}
