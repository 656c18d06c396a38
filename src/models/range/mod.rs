// Range module
// Navigation granularity, calendar step units and date windows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AgendaError;

/// Granularity of the visible agenda window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RangeUnit {
    #[default]
    Day,
    Week,
    Fortnight,
    Month,
    Quarter,
    Year,
}

/// Calendar unit used for stepping and period snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarUnit {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl RangeUnit {
    /// All units in selector order.
    pub const ALL: [RangeUnit; 6] = [
        RangeUnit::Day,
        RangeUnit::Week,
        RangeUnit::Fortnight,
        RangeUnit::Month,
        RangeUnit::Quarter,
        RangeUnit::Year,
    ];

    /// The calendar unit navigation steps in. A fortnight steps in weeks.
    pub fn step_unit(self) -> CalendarUnit {
        match self {
            RangeUnit::Day => CalendarUnit::Day,
            RangeUnit::Week | RangeUnit::Fortnight => CalendarUnit::Week,
            RangeUnit::Month => CalendarUnit::Month,
            RangeUnit::Quarter => CalendarUnit::Quarter,
            RangeUnit::Year => CalendarUnit::Year,
        }
    }

    /// How many step units one navigation moves.
    pub fn step_amount(self) -> u32 {
        match self {
            RangeUnit::Fortnight => 2,
            _ => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RangeUnit::Day => "Day",
            RangeUnit::Week => "Week",
            RangeUnit::Fortnight => "Fortnight",
            RangeUnit::Month => "Month",
            RangeUnit::Quarter => "Quarter",
            RangeUnit::Year => "Year",
        }
    }
}

impl fmt::Display for RangeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RangeUnit {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RangeUnit::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AgendaError::InvalidRangeUnit(s.to_string()))
    }
}

impl CalendarUnit {
    /// Length of the unit in months, for the month-based units.
    pub fn months(self) -> Option<u32> {
        match self {
            CalendarUnit::Month => Some(1),
            CalendarUnit::Quarter => Some(3),
            CalendarUnit::Year => Some(12),
            CalendarUnit::Day | CalendarUnit::Week => None,
        }
    }
}

impl Direction {
    pub fn signum(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Half-open window of civil dates, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Number of days in the window.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Iterate the dates of the window in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day < end)
    }
}
