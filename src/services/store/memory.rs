//! In-memory note store.
//!
//! Backs the preview binary and tests. Nothing is written to disk.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use super::{NoteStore, StoreError};
use crate::models::note::{Note, NoteKind};

#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
    next_id: AtomicU64,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, keeping their order.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
            next_id: AtomicU64::new(0),
        }
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn assign_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        format!("note-{}", n)
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn list(&self, kind: Option<NoteKind>) -> Result<Vec<Note>, StoreError> {
        let notes = self.notes.read().await;
        Ok(notes
            .iter()
            .filter(|note| kind.as_ref().map_or(true, |kind| &note.kind == kind))
            .cloned()
            .collect())
    }

    async fn save(&self, mut note: Note) -> Result<Note, StoreError> {
        let mut notes = self.notes.write().await;

        let existing = note
            .id
            .as_ref()
            .and_then(|id| notes.iter().position(|n| n.id.as_ref() == Some(id)));

        match existing {
            Some(index) => {
                log::debug!("Updating note {:?}", note.id);
                notes[index] = note.clone();
            }
            None => {
                if note.id.is_none() {
                    note.id = Some(self.assign_id());
                }
                log::debug!("Created note {:?}", note.id);
                notes.push(note.clone());
            }
        }

        Ok(note)
    }
}
