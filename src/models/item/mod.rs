// Scheduled item module
// Agenda-facing view of a note with its start resolved into a time zone

use chrono::{DateTime, Offset, SecondsFormat, TimeZone};

use crate::error::AgendaError;
use crate::models::note::{Note, NoteKind};
use crate::utils::date::parse_timestamp;

/// A note whose start, if any, has been resolved into the agenda's zone.
///
/// Items without a start are backlog items and never occupy a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledItem<Tz: TimeZone> {
    pub id: Option<String>,
    pub body: String,
    pub start: Option<DateTime<Tz>>,
    pub kind: NoteKind,
}

impl<Tz: TimeZone> ScheduledItem<Tz> {
    /// Create an unscheduled item
    pub fn new(body: impl Into<String>, kind: NoteKind) -> Self {
        Self {
            id: None,
            body: body.into(),
            start: None,
            kind,
        }
    }

    /// Create an event starting at `start`
    pub fn event(body: impl Into<String>, start: DateTime<Tz>) -> Self {
        Self {
            id: None,
            body: body.into(),
            start: Some(start),
            kind: NoteKind::Event,
        }
    }

    /// Empty event filling a quarter slot that has no real item.
    pub fn placeholder(start: DateTime<Tz>) -> Self {
        Self::event(String::new(), start)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_scheduled(&self) -> bool {
        self.start.is_some()
    }

    /// Convert a store record, failing on an unparseable start.
    ///
    /// A missing or blank start is not an error: the item is unscheduled.
    pub fn from_note(note: Note, tz: &Tz) -> Result<Self, AgendaError> {
        let start = parse_start(&note, tz)?;
        Ok(Self {
            id: note.id,
            body: note.body,
            start,
            kind: note.kind,
        })
    }

    /// Convert a store record, demoting a malformed start to unscheduled.
    ///
    /// One bad record must not blank the agenda, so the problem is logged and
    /// the item is kept without a start.
    pub fn from_note_lossy(note: Note, tz: &Tz) -> Self {
        let start = parse_start(&note, tz).unwrap_or_else(|err| {
            log::warn!("Treating item as unscheduled: {}", err);
            None
        });
        Self {
            id: note.id,
            body: note.body,
            start,
            kind: note.kind,
        }
    }

    /// Wire form of the item, with the start written as RFC 3339 to the
    /// millisecond.
    pub fn to_note(&self) -> Note {
        Note {
            id: self.id.clone(),
            body: self.body.clone(),
            start: self.start.as_ref().map(|start| {
                let fixed = start.offset().fix();
                start
                    .with_timezone(&fixed)
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
            }),
            kind: self.kind.clone(),
        }
    }
}

fn parse_start<Tz: TimeZone>(note: &Note, tz: &Tz) -> Result<Option<DateTime<Tz>>, AgendaError> {
    match note.start.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_timestamp(raw, tz)
            .map(Some)
            .ok_or_else(|| AgendaError::MalformedItem {
                id: note.id.clone(),
                value: raw.to_string(),
            }),
    }
}

/// Normalise store records, logging and demoting malformed starts.
pub fn normalize_notes<Tz: TimeZone>(notes: Vec<Note>, tz: &Tz) -> Vec<ScheduledItem<Tz>> {
    notes
        .into_iter()
        .map(|note| ScheduledItem::from_note_lossy(note, tz))
        .collect()
}
