// Date utility functions
// Time zone resolution, minute truncation and week arithmetic shared by the agenda

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike, Weekday,
};

/// Naive formats accepted for note timestamps that carry no UTC offset.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Resolve a wall-clock time in `tz` to a concrete instant.
///
/// Ambiguous times (clocks going back) resolve to the earliest instant. Times
/// inside a gap (clocks going forward) keep the offset that was in force
/// before the gap, so 02:30 on a spring-forward night becomes 03:30.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before = tz
                .offset_from_utc_datetime(&(naive - Duration::days(1)))
                .fix();
            let utc = naive - Duration::seconds(i64::from(before.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// Drop seconds and sub-seconds from a wall-clock time.
pub fn truncate_to_minute(naive: NaiveDateTime) -> NaiveDateTime {
    naive
        - Duration::seconds(i64::from(naive.second()))
        - Duration::nanoseconds(i64::from(naive.nanosecond()))
}

/// Calculate the start of the week containing the given date.
pub fn week_start(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_sunday());
    let first = i64::from(first_day.num_days_from_sunday());
    let offset = (weekday - first + 7) % 7;
    date - Duration::days(offset)
}

/// Map a settings index (0 = Sunday … 6 = Saturday) to a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Parse a note timestamp into `tz`.
///
/// RFC 3339 strings keep their instant; naive date-times and plain dates are
/// read as wall-clock times in `tz`. Returns `None` when nothing matches.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(resolve_local(tz, naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| start_of_day(date, tz))
}
