//! Page application state and UI event dispatch.
//!
//! # Responsibility
//! - Hold every page-level service over one shared key-value store.
//! - Translate UI events into service calls and re-render from storage.
//!
//! # Invariants
//! - Every handled event re-reads notes through `NoteStore::list` before
//!   rendering; no cached copy is trusted.

use crate::config::{ConfigError, CoreConfig};
use crate::kv::{KeyValueStore, KvError};
use crate::repo::note_repo::KvNoteRepository;
use crate::service::counter_service::VisitCounter;
use crate::service::note_service::{NoteStore, NoteStoreError};
use crate::service::preference_service::{Difficulty, DifficultyService};
use crate::view::{render_difficulty, render_notes, DifficultyView, NoteRow};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error surfaced by page-level operations.
#[derive(Debug)]
pub enum PageError {
    Config(ConfigError),
    Notes(NoteStoreError),
    Storage(KvError),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Notes(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Notes(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ConfigError> for PageError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<NoteStoreError> for PageError {
    fn from(value: NoteStoreError) -> Self {
        Self::Notes(value)
    }
}

impl From<KvError> for PageError {
    fn from(value: KvError) -> Self {
        Self::Storage(value)
    }
}

/// User actions the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    AddNote,
    EditNote { id: String, text: String },
    DeleteNote { id: String },
    ToggleDifficulty,
}

/// Everything a presentation layer needs to draw the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub notes: Vec<NoteRow>,
    pub difficulty: DifficultyView,
    /// Row that should receive input focus, set after adding a note.
    pub focus_note_id: Option<String>,
}

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
    /// `false` when the event targeted a note that no longer exists.
    pub applied: bool,
    pub view: PageView,
}

/// Snapshot logged once the page has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStatus {
    /// `None` when no preference has been saved yet.
    pub difficulty_preference: Option<Difficulty>,
    pub saved_notes: usize,
}

/// Workout page state, shared by all UI handlers.
pub struct NotesPage<'s, S: KeyValueStore> {
    notes: NoteStore<KvNoteRepository<&'s S>>,
    difficulty: DifficultyService<&'s S>,
    visits: VisitCounter<&'s S>,
}

impl<'s, S: KeyValueStore> NotesPage<'s, S> {
    /// Builds the page over `store` using the keys in `config`.
    pub fn new(store: &'s S, config: &CoreConfig) -> Result<Self, PageError> {
        config.validate()?;
        Ok(Self {
            notes: NoteStore::open(store, config.notes_key.clone()),
            difficulty: DifficultyService::new(store, config.difficulty_key.clone()),
            visits: VisitCounter::new(store, config.visit_key.clone()),
        })
    }

    pub fn notes(&self) -> &NoteStore<KvNoteRepository<&'s S>> {
        &self.notes
    }

    /// Renders the current state without mutating anything.
    pub fn render(&self) -> Result<PageView, PageError> {
        self.render_with_focus(None)
    }

    /// Applies one UI event and re-renders.
    pub fn handle(&self, event: UiEvent) -> Result<EventOutcome, PageError> {
        let (applied, focus_note_id) = match event {
            UiEvent::AddNote => {
                let note = self.notes.create()?;
                (true, Some(note.id.to_string()))
            }
            UiEvent::EditNote { id, text } => (self.notes.update(id.as_str(), text)?, None),
            UiEvent::DeleteNote { id } => (self.notes.delete(id.as_str())?, None),
            UiEvent::ToggleDifficulty => {
                self.difficulty.toggle()?;
                (true, None)
            }
        };
        Ok(EventOutcome {
            applied,
            view: self.render_with_focus(focus_note_id)?,
        })
    }

    /// Counts one page view and returns the new total.
    pub fn record_visit(&self) -> Result<u64, PageError> {
        Ok(self.visits.increment()?)
    }

    pub fn visit_count(&self) -> Result<u64, PageError> {
        Ok(self.visits.current()?)
    }

    /// Collects and logs the load-time summary.
    pub fn status(&self) -> Result<PageStatus, PageError> {
        let difficulty_preference = if self.difficulty.is_set()? {
            Some(self.difficulty.current()?)
        } else {
            None
        };
        let status = PageStatus {
            difficulty_preference,
            saved_notes: self.notes.list()?.len(),
        };
        info!(
            "event=page_status module=app status=ok difficulty={} saved_notes={}",
            status
                .difficulty_preference
                .map_or("unset", Difficulty::as_str),
            status.saved_notes
        );
        Ok(status)
    }

    fn render_with_focus(&self, focus_note_id: Option<String>) -> Result<PageView, PageError> {
        Ok(PageView {
            notes: render_notes(&self.notes.list()?),
            difficulty: render_difficulty(self.difficulty.current()?),
            focus_note_id,
        })
    }
}
