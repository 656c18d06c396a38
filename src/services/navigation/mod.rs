// Navigation service
// Previous/next date stepping by range unit, snapped to period starts

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use crate::error::{AgendaError, Result};
use crate::models::range::{CalendarUnit, DateRange, Direction, RangeUnit};
use crate::models::settings::AgendaSettings;
use crate::utils::date::week_start;

/// Date-range stepping with a single, fixed week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeNavigator {
    week_start: Weekday,
}

impl Default for RangeNavigator {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

impl RangeNavigator {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    pub fn from_settings(settings: &AgendaSettings) -> Self {
        Self::new(settings.week_start())
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Move one range unit from `current` and snap to the start of the
    /// step unit's period.
    ///
    /// A fortnight moves two weeks; every other unit moves one of itself.
    /// Month-based steps clamp the day to the end of shorter months before
    /// snapping, which only matters for the intermediate value.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use notes_agenda::models::range::{Direction, RangeUnit};
    /// use notes_agenda::services::navigation::RangeNavigator;
    ///
    /// let navigator = RangeNavigator::default();
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let previous = navigator.step(date, RangeUnit::Month, Direction::Backward).unwrap();
    /// assert_eq!(previous, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    /// ```
    pub fn step(
        &self,
        current: NaiveDate,
        unit: RangeUnit,
        direction: Direction,
    ) -> Result<NaiveDate> {
        let step_unit = unit.step_unit();
        let delta = i64::from(unit.step_amount()) * direction.signum();

        let candidate = add_to_calendar(current, step_unit, delta).ok_or(
            AgendaError::DateOutOfRange {
                from: current,
                unit,
            },
        )?;
        let target = self.start_of_period(candidate, step_unit);

        log::debug!(
            "Navigated {:?} by {} from {} to {}",
            direction,
            unit,
            current,
            target
        );
        Ok(target)
    }

    /// Like [`step`](Self::step), with the unit given by name.
    pub fn step_named(
        &self,
        current: NaiveDate,
        unit: &str,
        direction: Direction,
    ) -> Result<NaiveDate> {
        let unit = unit.parse::<RangeUnit>().map_err(|err| {
            log::warn!("Navigation rejected: {}", err);
            err
        })?;
        self.step(current, unit, direction)
    }

    /// Canonical first day of the period of `unit` containing `date`.
    pub fn start_of_period(&self, date: NaiveDate, unit: CalendarUnit) -> NaiveDate {
        match unit {
            CalendarUnit::Day => date,
            CalendarUnit::Week => week_start(date, self.week_start),
            CalendarUnit::Month => first_of_month(date.year(), date.month()).unwrap_or(date),
            CalendarUnit::Quarter => {
                let quarter_month = (date.month0() / 3) * 3 + 1;
                first_of_month(date.year(), quarter_month).unwrap_or(date)
            }
            CalendarUnit::Year => first_of_month(date.year(), 1).unwrap_or(date),
        }
    }

    /// Window shown for `unit` around `date`: from the period start through
    /// one full step (two weeks for a fortnight).
    pub fn period(&self, date: NaiveDate, unit: RangeUnit) -> Result<DateRange> {
        let step_unit = unit.step_unit();
        let start = self.start_of_period(date, step_unit);
        let end = add_to_calendar(start, step_unit, i64::from(unit.step_amount())).ok_or(
            AgendaError::DateOutOfRange { from: date, unit },
        )?;
        Ok(DateRange { start, end })
    }
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Add `delta` units to `date`. Returns `None` outside chrono's date range.
fn add_to_calendar(date: NaiveDate, unit: CalendarUnit, delta: i64) -> Option<NaiveDate> {
    match unit {
        CalendarUnit::Day => date.checked_add_signed(Duration::days(delta)),
        CalendarUnit::Week => date.checked_add_signed(Duration::weeks(delta)),
        CalendarUnit::Month | CalendarUnit::Quarter | CalendarUnit::Year => {
            let per_unit = i64::from(unit.months()?);
            let months = u32::try_from((per_unit * delta).unsigned_abs()).ok()?;
            if delta >= 0 {
                date.checked_add_months(Months::new(months))
            } else {
                date.checked_sub_months(Months::new(months))
            }
        }
    }
}
