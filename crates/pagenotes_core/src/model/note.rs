//! Note domain model.
//!
//! # Responsibility
//! - Define the `Note` record and the ordered `NoteCollection` it lives in.
//! - Generate fresh note ids (`note-<millis>-<base36>`).
//!
//! # Invariants
//! - `NoteId` is never empty and never changes after creation.
//! - Ids are unique within one `NoteCollection` at all times, including
//!   collections decoded from storage.
//! - Collection order is insertion order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const NOTE_ID_PREFIX: &str = "note";
const NOTE_ID_SUFFIX_LEN: usize = 9;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Validation errors for note identity and collection shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// An id was the empty string.
    EmptyId,
    /// Two notes in one collection share the same id.
    DuplicateId(String),
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "note id must not be empty"),
            Self::DuplicateId(id) => write!(f, "duplicate note id `{id}`"),
        }
    }
}

impl Error for NoteValidationError {}

/// Opaque note identifier.
///
/// Generated ids look like `note-1700000000000-abc123xyz`, but ids read
/// back from storage are accepted verbatim as long as they are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteId(String);

impl NoteId {
    /// Generates a new id from the wall clock plus a random base-36 suffix.
    ///
    /// Uniqueness is probabilistic and not cryptographic; callers must not
    /// rely on ids being unguessable.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        Self(format!(
            "{NOTE_ID_PREFIX}-{millis}-{}",
            base36_suffix(Uuid::new_v4().as_u128(), NOTE_ID_SUFFIX_LEN)
        ))
    }

    /// Wraps an existing id string.
    pub fn parse(value: impl Into<String>) -> Result<Self, NoteValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(NoteValidationError::EmptyId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NoteId {
    type Error = NoteValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<NoteId> for String {
    fn from(value: NoteId) -> Self {
        value.0
    }
}

/// One user-editable note.
///
/// Serialized with exactly the wire fields `id` and `text`; unknown fields
/// are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id assigned at creation.
    pub id: NoteId,
    /// Free text, empty for freshly created notes.
    pub text: String,
}

impl Note {
    /// Creates a note with empty text.
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            text: String::new(),
        }
    }
}

/// Ordered set of notes, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Note>", into = "Vec<Note>")]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, rejecting duplicate ids.
    pub fn from_notes(notes: Vec<Note>) -> Result<Self, NoteValidationError> {
        let mut seen = HashSet::with_capacity(notes.len());
        for note in &notes {
            if !seen.insert(note.id.as_str()) {
                return Err(NoteValidationError::DuplicateId(note.id.to_string()));
            }
        }
        Ok(Self { notes })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id.as_str() == id)
    }

    /// Returns an id not yet present in this collection.
    pub fn next_id(&self) -> NoteId {
        self.next_id_with(NoteId::generate)
    }

    /// Same as [`Self::next_id`] with a caller-supplied generator.
    ///
    /// The generator is called again for as long as it returns a taken id.
    pub fn next_id_with(&self, mut generate: impl FnMut() -> NoteId) -> NoteId {
        loop {
            let candidate = generate();
            if !self.contains(candidate.as_str()) {
                return candidate;
            }
        }
    }

    /// Appends a note at the end of display order.
    pub fn push(&mut self, note: Note) -> Result<(), NoteValidationError> {
        if self.contains(note.id.as_str()) {
            return Err(NoteValidationError::DuplicateId(note.id.to_string()));
        }
        self.notes.push(note);
        Ok(())
    }

    /// Replaces the text of the note with `id`. Returns whether it existed.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.notes.iter_mut().find(|note| note.id.as_str() == id) {
            Some(note) => {
                note.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Removes the note with `id`. Returns whether a removal occurred.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => false,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id.as_str() == id)
    }
}

impl TryFrom<Vec<Note>> for NoteCollection {
    type Error = NoteValidationError;

    fn try_from(value: Vec<Note>) -> Result<Self, Self::Error> {
        Self::from_notes(value)
    }
}

impl From<NoteCollection> for Vec<Note> {
    fn from(value: NoteCollection) -> Self {
        value.notes
    }
}

fn base36_suffix(mut value: u128, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        out.push(char::from(BASE36_DIGITS[(value % 36) as usize]));
        value /= 36;
    }
    out
}
