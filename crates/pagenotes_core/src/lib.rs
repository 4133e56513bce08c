//! Core domain logic for PageNotes.
//! This crate is the single source of truth for page-local note invariants.

pub mod app;
pub mod config;
pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use app::{EventOutcome, NotesPage, PageError, PageStatus, PageView, UiEvent};
pub use config::{ConfigError, CoreConfig};
pub use kv::{KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteCollection, NoteId, NoteValidationError};
pub use repo::note_repo::{KvNoteRepository, NoteRepository, RepoError, RepoResult};
pub use service::counter_service::VisitCounter;
pub use service::note_service::{NoteStore, NoteStoreError, NoteStoreResult};
pub use service::preference_service::{Difficulty, DifficultyService};
pub use view::{render_difficulty, render_notes, DifficultyView, NoteRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
