//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/update/delete/list over the page's note collection.
//! - Own the single storage key the collection lives under.
//! - Recover from corrupt blobs by treating them as an empty collection.
//!
//! # Invariants
//! - Every mutation persists the full collection before returning.
//! - `update` on an unknown id performs no write and returns `false`.
//! - `delete` always persists, even when nothing was removed.
//! - Note text never appears in log events.

use crate::kv::{KeyValueStore, KvError};
use crate::model::note::{Note, NoteCollection};
use crate::repo::note_repo::{KvNoteRepository, NoteRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteStoreError {
    /// Stored blob is not a well-formed note collection.
    ///
    /// Only returned by [`NoteStore::try_list`]; every other entry point
    /// recovers by treating the slot as empty.
    CorruptStore { key: String, reason: String },
    /// Backing key-value store failed.
    Storage(KvError),
    /// Collection could not be serialized; the slot was left untouched.
    Encode(serde_json::Error),
    /// Internal consistency mismatch inside one operation.
    InconsistentState(&'static str),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CorruptStore { key, reason } => {
                write!(f, "corrupt note store under `{key}`: {reason}")
            }
            Self::Storage(err) => write!(f, "note storage failed: {err}"),
            Self::Encode(err) => write!(f, "note encoding failed: {err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::CorruptStore { .. } | Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for NoteStoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Kv(err) => Self::Storage(err),
            RepoError::Encode(err) => Self::Encode(err),
            RepoError::CorruptStore { key, reason } => Self::CorruptStore { key, reason },
        }
    }
}

pub type NoteStoreResult<T> = Result<T, NoteStoreError>;

/// Durable CRUD facade over one note collection.
pub struct NoteStore<R: NoteRepository> {
    repo: R,
}

impl<S: KeyValueStore> NoteStore<KvNoteRepository<S>> {
    /// Binds a store to `key` inside the given key-value backend.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        Self::new(KvNoteRepository::new(store, key))
    }
}

impl<R: NoteRepository> NoteStore<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all notes in insertion order, surfacing corruption as an error.
    pub fn try_list(&self) -> NoteStoreResult<Vec<Note>> {
        Ok(self.repo.load_collection()?.into_notes())
    }

    /// Lists all notes in insertion order.
    ///
    /// A corrupt blob is logged and reported as an empty list.
    pub fn list(&self) -> NoteStoreResult<Vec<Note>> {
        Ok(self.load_or_empty()?.into_notes())
    }

    /// Appends a new empty note and returns it.
    pub fn create(&self) -> NoteStoreResult<Note> {
        let mut collection = self.load_or_empty()?;
        let note = Note::new(collection.next_id());
        collection.push(note.clone()).map_err(|_| {
            NoteStoreError::InconsistentState("generated note id already taken")
        })?;
        self.repo.save_collection(&collection)?;
        info!(
            "event=note_create module=notes status=ok count={}",
            collection.len()
        );
        Ok(note)
    }

    /// Replaces the text of note `id`. Returns `false` without writing when
    /// the note does not exist.
    pub fn update(&self, id: &str, text: impl Into<String>) -> NoteStoreResult<bool> {
        let mut collection = self.load_or_empty()?;
        if !collection.set_text(id, text) {
            debug!("event=note_update module=notes status=skipped reason=not_found");
            return Ok(false);
        }
        self.repo.save_collection(&collection)?;
        info!("event=note_update module=notes status=ok");
        Ok(true)
    }

    /// Removes note `id`. Returns whether a removal occurred.
    pub fn delete(&self, id: &str) -> NoteStoreResult<bool> {
        let mut collection = self.load_or_empty()?;
        let removed = collection.remove(id);
        self.repo.save_collection(&collection)?;
        info!(
            "event=note_delete module=notes status=ok removed={removed} count={}",
            collection.len()
        );
        Ok(removed)
    }

    /// Overwrites the slot with an empty collection.
    pub fn reset(&self) -> NoteStoreResult<()> {
        self.repo.save_collection(&NoteCollection::new())?;
        info!("event=note_reset module=notes status=ok");
        Ok(())
    }

    /// Looks up one note by id.
    pub fn get(&self, id: &str) -> NoteStoreResult<Option<Note>> {
        Ok(self.load_or_empty()?.get(id).cloned())
    }

    fn load_or_empty(&self) -> NoteStoreResult<NoteCollection> {
        match self.repo.load_collection() {
            Ok(collection) => Ok(collection),
            Err(RepoError::CorruptStore { key, reason }) => {
                warn!(
                    "event=note_load module=notes status=recovered key={key} reason={}",
                    reason.replace(['\n', '\r'], " ")
                );
                Ok(NoteCollection::new())
            }
            Err(other) => Err(other.into()),
        }
    }
}
