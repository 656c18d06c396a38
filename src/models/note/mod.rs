// Note module
// Wire-shaped note record exchanged with the note store

use serde::{Deserialize, Serialize};

/// Kind tag carried by every note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoteKind {
    #[default]
    Note,
    Event,
    Workspace,
    /// A kind this client does not know about, kept verbatim so it is
    /// written back unchanged.
    Other(String),
}

impl NoteKind {
    pub fn as_str(&self) -> &str {
        match self {
            NoteKind::Note => "note",
            NoteKind::Event => "event",
            NoteKind::Workspace => "workspace",
            NoteKind::Other(raw) => raw,
        }
    }
}

impl From<String> for NoteKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "note" => NoteKind::Note,
            "event" => NoteKind::Event,
            "workspace" => NoteKind::Workspace,
            _ => NoteKind::Other(raw),
        }
    }
}

impl From<NoteKind> for String {
    fn from(kind: NoteKind) -> Self {
        match kind {
            NoteKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A note as the store sends and accepts it.
///
/// `start` stays a raw string here; it is parsed when the note is turned into
/// a [`ScheduledItem`](crate::models::item::ScheduledItem).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: NoteKind,
}

impl Note {
    pub fn new(body: impl Into<String>, kind: NoteKind) -> Self {
        Self {
            id: None,
            body: body.into(),
            start: None,
            kind,
        }
    }

    /// Set the raw start timestamp
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_store_record() {
        let json =
            r#"{"_id":"n1","body":"standup","start":"2024-03-15T09:15:00.000Z","type":"event"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(
            note,
            Note {
                id: Some("n1".to_string()),
                body: "standup".to_string(),
                start: Some("2024-03-15T09:15:00.000Z".to_string()),
                kind: NoteKind::Event,
            }
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let note: Note = serde_json::from_str(r#"{"body":"loose thought"}"#).unwrap();
        assert_eq!(note.id, None);
        assert_eq!(note.start, None);
        assert_eq!(note.kind, NoteKind::Note);
    }

    #[test]
    fn test_unknown_kind_is_kept_verbatim() {
        let note: Note = serde_json::from_str(r#"{"body":"x","type":"bookmark"}"#).unwrap();
        assert_eq!(note.kind, NoteKind::Other("bookmark".to_string()));

        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"body":"x","type":"bookmark"}"#);
    }

    #[test]
    fn test_serialize_omits_absent_id_and_start() {
        let json = serde_json::to_string(&Note::new("draft", NoteKind::Event)).unwrap();
        assert_eq!(json, r#"{"body":"draft","type":"event"}"#);
    }
}
