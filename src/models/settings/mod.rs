// Settings module
// User-facing agenda configuration

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::range::RangeUnit;
use crate::utils::date::weekday_from_index;

/// Hour the agenda anchors on when the viewed day is not today.
pub const DEFAULT_ACTIVE_HOUR: u32 = 7;

/// Agenda configuration, stored as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaSettings {
    /// 0 = Sunday, 1 = Monday, … 6 = Saturday
    pub first_day_of_week: u8,
    pub default_active_hour: u32,
    pub default_range: RangeUnit,
    /// IANA zone name; the system zone is used when absent
    pub time_zone: Option<String>,
}

impl Default for AgendaSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            default_active_hour: DEFAULT_ACTIVE_HOUR,
            default_range: RangeUnit::Day,
            time_zone: None,
        }
    }
}

impl AgendaSettings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if weekday_from_index(self.first_day_of_week).is_none() {
            return Err(SettingsValidationError::InvalidFirstDayOfWeek(
                self.first_day_of_week,
            ));
        }

        if self.default_active_hour > 23 {
            return Err(SettingsValidationError::InvalidActiveHour(
                self.default_active_hour,
            ));
        }

        self.time_zone()?;

        Ok(())
    }

    /// First day of the week; out-of-range indices fall back to Sunday.
    pub fn week_start(&self) -> Weekday {
        weekday_from_index(self.first_day_of_week).unwrap_or(Weekday::Sun)
    }

    /// Parsed time zone, or `None` for the system zone.
    pub fn time_zone(&self) -> Result<Option<chrono_tz::Tz>, SettingsValidationError> {
        match self.time_zone.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name
                .parse::<chrono_tz::Tz>()
                .map(Some)
                .map_err(|_| SettingsValidationError::UnknownTimeZone(name.to_string())),
        }
    }
}

/// Validation errors for AgendaSettings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValidationError {
    InvalidFirstDayOfWeek(u8),
    InvalidActiveHour(u32),
    UnknownTimeZone(String),
}

impl std::fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFirstDayOfWeek(day) => {
                write!(f, "First day of week must be 0-6 (got {})", day)
            }
            Self::InvalidActiveHour(hour) => {
                write!(f, "Default active hour must be 0-23 (got {})", hour)
            }
            Self::UnknownTimeZone(name) => write!(f, "Unknown time zone: {}", name),
        }
    }
}

impl std::error::Error for SettingsValidationError {}
