//! Assignment of scheduled items to hour buckets and quarter slots.

use chrono::{NaiveDateTime, TimeZone, Timelike};

use super::slot_grid::HOURS_PER_DAY;
use crate::models::item::ScheduledItem;
use crate::utils::date::truncate_to_minute;

/// Items grouped by the hour of their start, in input order.
#[derive(Debug)]
pub struct HourBins<'a, Tz: TimeZone> {
    buckets: Vec<Vec<&'a ScheduledItem<Tz>>>,
}

impl<'a, Tz: TimeZone> HourBins<'a, Tz> {
    /// Items that start within `hour`. Out-of-range hours are empty.
    pub fn hour(&self, hour: u32) -> &[&'a ScheduledItem<Tz>] {
        self.buckets
            .get(hour as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[&'a ScheduledItem<Tz>])> + '_ {
        (0u32..).zip(self.buckets.iter().map(Vec::as_slice))
    }

    /// Number of binned items across all hours.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bin `items` by the hour of their start as seen in `tz`.
///
/// Unscheduled items are dropped. The calendar date of the start is not
/// considered: an item from another day still lands in its hour bucket, it
/// just never matches a slot of the viewed day.
pub fn bin<'a, Tz: TimeZone>(items: &'a [ScheduledItem<Tz>], tz: &Tz) -> HourBins<'a, Tz> {
    let mut buckets: Vec<Vec<&'a ScheduledItem<Tz>>> =
        (0..HOURS_PER_DAY).map(|_| Vec::new()).collect();

    for item in items {
        if let Some(start) = &item.start {
            let hour = start.with_timezone(tz).hour() as usize;
            buckets[hour].push(item);
        }
    }

    HourBins { buckets }
}

/// Wall-clock start of an item in `tz`, truncated to the minute.
pub fn start_minute<Tz: TimeZone>(item: &ScheduledItem<Tz>, tz: &Tz) -> Option<NaiveDateTime> {
    item.start
        .as_ref()
        .map(|start| truncate_to_minute(start.with_timezone(tz).naive_local()))
}

/// First item, in input order, whose start minute equals the slot's wall time.
pub fn find_for_slot<'a, Tz: TimeZone>(
    hour_items: &[&'a ScheduledItem<Tz>],
    slot: NaiveDateTime,
    tz: &Tz,
) -> Option<&'a ScheduledItem<Tz>> {
    let slot = truncate_to_minute(slot);
    hour_items
        .iter()
        .copied()
        .find(|item| start_minute(item, tz) == Some(slot))
}
