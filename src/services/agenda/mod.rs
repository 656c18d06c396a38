//! Day agenda: 24 hour buckets of four quarter slots each.
//!
//! The controller ties the slot grid, item binning and active-hour
//! resolution into a layout the presentation layer can draw directly, and
//! forwards navigation and saves to their collaborators. Rendering is pure:
//! the same date, items and "now" always give the same layout.

pub mod active_slot;
pub mod binner;
pub mod slot_grid;

use chrono::{DateTime, NaiveDate, TimeZone};

pub use active_slot::{ActiveSlot, AutoScrollRequest};

use crate::error::{AgendaError, Result};
use crate::models::item::{normalize_notes, ScheduledItem};
use crate::models::note::NoteKind;
use crate::models::range::{DateRange, Direction, RangeUnit};
use crate::models::settings::AgendaSettings;
use crate::services::clock::Clock;
use crate::services::navigation::RangeNavigator;
use crate::services::store::NoteStore;

use self::binner::{bin, find_for_slot};
use self::slot_grid::{hour_buckets, hour_label, quarter_offsets, slot_timestamp, slot_wall_time};

/// One quarter-hour cell. Always holds exactly one item.
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterSlot<Tz: TimeZone> {
    pub minute_offset: u32,
    pub item: ScheduledItem<Tz>,
    /// True when no real item matched and `item` was synthesized.
    pub is_placeholder: bool,
}

/// One hour row of the agenda.
#[derive(Debug, Clone, PartialEq)]
pub struct HourRenderSlot<Tz: TimeZone> {
    pub hour: u32,
    pub label: String,
    pub is_active: bool,
    pub is_current: bool,
    pub quarter_slots: Vec<QuarterSlot<Tz>>,
}

/// Full render output for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaLayout<Tz: TimeZone> {
    pub date: NaiveDate,
    pub active: ActiveSlot,
    pub scroll_request: AutoScrollRequest,
    pub hours: Vec<HourRenderSlot<Tz>>,
}

impl<Tz: TimeZone> AgendaLayout<Tz> {
    /// The cell at `hour` and quarter `minute_offset`, if it exists.
    pub fn cell(&self, hour: u32, minute_offset: u32) -> Option<&QuarterSlot<Tz>> {
        self.hours
            .get(hour as usize)?
            .quarter_slots
            .iter()
            .find(|slot| slot.minute_offset == minute_offset)
    }

    /// All cells in display order with their hour.
    pub fn cells(&self) -> impl Iterator<Item = (u32, &QuarterSlot<Tz>)> + '_ {
        self.hours
            .iter()
            .flat_map(|hour| hour.quarter_slots.iter().map(move |slot| (hour.hour, slot)))
    }

    pub fn current_hour_slot(&self) -> Option<&HourRenderSlot<Tz>> {
        self.hours.iter().find(|hour| hour.is_current)
    }
}

/// Composition root of the agenda engine.
pub struct AgendaController<Tz: TimeZone, C> {
    tz: Tz,
    clock: C,
    navigator: RangeNavigator,
    default_active_hour: u32,
    default_range: RangeUnit,
}

impl<Tz: TimeZone, C: Clock<Tz>> AgendaController<Tz, C> {
    pub fn new(settings: &AgendaSettings, tz: Tz, clock: C) -> Self {
        Self {
            tz,
            clock,
            navigator: RangeNavigator::from_settings(settings),
            default_active_hour: settings.default_active_hour,
            default_range: settings.default_range,
        }
    }

    pub fn time_zone(&self) -> &Tz {
        &self.tz
    }

    pub fn navigator(&self) -> &RangeNavigator {
        &self.navigator
    }

    /// Lay out `date` with `items`, highlighting relative to `now`.
    pub fn render(
        &self,
        date: NaiveDate,
        items: &[ScheduledItem<Tz>],
        now: &DateTime<Tz>,
    ) -> AgendaLayout<Tz> {
        let bins = bin(items, &self.tz);
        let now = now.with_timezone(&self.tz);
        let active = active_slot::resolve_with_default(date, &now, self.default_active_hour);

        let hours = hour_buckets()
            .map(|hour| {
                let hour_items = bins.hour(hour);

                let quarter_slots: Vec<QuarterSlot<Tz>> = quarter_offsets()
                    .into_iter()
                    .map(|minute| {
                        let wall = slot_wall_time(date, hour, minute);
                        match find_for_slot(hour_items, wall, &self.tz) {
                            Some(item) => QuarterSlot {
                                minute_offset: minute,
                                item: item.clone(),
                                is_placeholder: false,
                            },
                            None => QuarterSlot {
                                minute_offset: minute,
                                item: ScheduledItem::placeholder(slot_timestamp(
                                    date, hour, minute, &self.tz,
                                )),
                                is_placeholder: true,
                            },
                        }
                    })
                    .collect();

                let placed = quarter_slots.iter().filter(|s| !s.is_placeholder).count();
                if placed < hour_items.len() {
                    log::debug!(
                        "{} item(s) in hour {:02} on {} not placed in a quarter slot",
                        hour_items.len() - placed,
                        hour,
                        date
                    );
                }

                HourRenderSlot {
                    hour,
                    label: hour_label(hour),
                    is_active: active.is_active(hour),
                    is_current: active.is_current(hour),
                    quarter_slots,
                }
            })
            .collect();

        AgendaLayout {
            date,
            active,
            scroll_request: AutoScrollRequest {
                date,
                hour: active.active_hour,
            },
            hours,
        }
    }

    /// Render with "now" taken from the controller's clock.
    pub fn render_now(&self, date: NaiveDate, items: &[ScheduledItem<Tz>]) -> AgendaLayout<Tz> {
        let now = self.clock.now();
        self.render(date, items, &now)
    }

    pub fn navigate(
        &self,
        current: NaiveDate,
        unit: RangeUnit,
        direction: Direction,
    ) -> Result<NaiveDate> {
        self.navigator.step(current, unit, direction)
    }

    pub fn navigate_named(
        &self,
        current: NaiveDate,
        unit: &str,
        direction: Direction,
    ) -> Result<NaiveDate> {
        self.navigator.step_named(current, unit, direction)
    }

    /// Today's civil date in the agenda's zone.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.tz).date_naive()
    }

    pub fn visible_range(&self, date: NaiveDate, unit: RangeUnit) -> Result<DateRange> {
        self.navigator.period(date, unit)
    }

    /// Range unit selected when the agenda opens.
    pub fn default_range(&self) -> RangeUnit {
        self.default_range
    }

    /// Window for `date` using the configured default unit.
    pub fn default_visible_range(&self, date: NaiveDate) -> Result<DateRange> {
        self.visible_range(date, self.default_range)
    }

    /// Load event notes from the store as agenda items.
    ///
    /// Notes with unparseable starts are kept as unscheduled items.
    pub async fn fetch_items<S>(&self, store: &S) -> Result<Vec<ScheduledItem<Tz>>>
    where
        S: NoteStore + ?Sized,
    {
        let notes = store
            .list(Some(NoteKind::Event))
            .await
            .map_err(AgendaError::Fetch)?;
        log::debug!("Fetched {} event note(s)", notes.len());
        Ok(normalize_notes(notes, &self.tz))
    }

    /// Forward one save to the store. No retry and no validation.
    pub async fn commit<S>(&self, store: &S, item: ScheduledItem<Tz>) -> Result<ScheduledItem<Tz>>
    where
        S: NoteStore + ?Sized,
    {
        let saved = store.save(item.to_note()).await.map_err(|err| {
            log::error!("Failed to save item {:?}: {}", item.id, err);
            AgendaError::Commit(err)
        })?;
        Ok(ScheduledItem::from_note_lossy(saved, &self.tz))
    }

    /// Place `item` in `items` right away, then save it.
    ///
    /// On success the stored record replaces the local entry. On failure the
    /// local entry is left in place and the error is returned.
    pub async fn commit_optimistic<S>(
        &self,
        store: &S,
        items: &mut Vec<ScheduledItem<Tz>>,
        item: ScheduledItem<Tz>,
    ) -> Result<ScheduledItem<Tz>>
    where
        S: NoteStore + ?Sized,
    {
        let index = place_optimistically(items, item.clone());
        let saved = self.commit(store, item).await?;
        items[index] = saved.clone();
        Ok(saved)
    }
}

/// Replace the item with the same id, or append. Returns its index.
pub fn place_optimistically<Tz: TimeZone>(
    items: &mut Vec<ScheduledItem<Tz>>,
    item: ScheduledItem<Tz>,
) -> usize {
    let existing = item
        .id
        .as_ref()
        .and_then(|id| items.iter().position(|i| i.id.as_ref() == Some(id)));

    match existing {
        Some(index) => {
            items[index] = item;
            index
        }
        None => {
            items.push(item);
            items.len() - 1
        }
    }
}
