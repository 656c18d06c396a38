// Error types
// Conditions reported by the agenda engine to its callers

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::range::RangeUnit;
use crate::services::store::StoreError;

/// Errors raised by navigation, item normalisation and commits.
///
/// None of these are fatal: the caller decides whether to retry, revert or
/// notify the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgendaError {
    /// Navigation was requested with a unit name outside the known set.
    #[error("invalid range unit: {0:?}")]
    InvalidRangeUnit(String),

    /// A note carries a start timestamp that cannot be parsed.
    #[error("malformed start timestamp {value:?} on item {id:?}")]
    MalformedItem { id: Option<String>, value: String },

    /// Stepping would leave the representable calendar.
    #[error("cannot step {unit} from {from}: date out of range")]
    DateOutOfRange { from: NaiveDate, unit: RangeUnit },

    /// The note store could not list notes.
    #[error("fetching notes failed: {0}")]
    Fetch(#[source] StoreError),

    /// The note store refused or failed a save.
    #[error("commit failed: {0}")]
    Commit(#[source] StoreError),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
