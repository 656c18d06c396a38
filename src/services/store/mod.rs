// Note store module
// Async boundary to the external note store

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::note::{Note, NoteKind};

pub use memory::MemoryNoteStore;

/// Failures reported by a note store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("note store unavailable: {0}")]
    Unavailable(String),
    #[error("note rejected: {0}")]
    Rejected(String),
    #[error("note not found: {0}")]
    NotFound(String),
}

/// Read and write access to the user's notes.
///
/// The agenda neither retries nor orders calls; concurrent saves resolve as
/// last write wins inside the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// List notes in store order, optionally restricted to one kind.
    async fn list(&self, kind: Option<NoteKind>) -> Result<Vec<Note>, StoreError>;

    /// Create or update a note. New notes come back with an id assigned.
    async fn save(&self, note: Note) -> Result<Note, StoreError>;
}
