//! Note collection repository over the key-value capability.
//!
//! # Responsibility
//! - Encode/decode the whole `NoteCollection` as one JSON blob.
//! - Report malformed blobs as `CorruptStore` instead of masking them.
//!
//! # Invariants
//! - A missing blob decodes to an empty collection.
//! - A well-formed blob is a JSON array of objects carrying string `id` and
//!   `text` fields with unique ids; extra fields are ignored.
//! - Every save replaces the blob wholesale.

use crate::kv::{KeyValueStore, KvError};
use crate::model::note::NoteCollection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note blob persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Backing store failed to read or write.
    Kv(KvError),
    /// Blob under `key` exists but is not a well-formed note collection.
    CorruptStore { key: String, reason: String },
    /// Collection could not be serialized; nothing was written.
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kv(err) => write!(f, "{err}"),
            Self::CorruptStore { key, reason } => {
                write!(f, "corrupt note blob under `{key}`: {reason}")
            }
            Self::Encode(err) => write!(f, "failed to encode note collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kv(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::CorruptStore { .. } => None,
        }
    }
}

impl From<KvError> for RepoError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// Repository interface for whole-collection note persistence.
pub trait NoteRepository {
    /// Loads the full collection.
    fn load_collection(&self) -> RepoResult<NoteCollection>;
    /// Replaces the stored collection.
    fn save_collection(&self, collection: &NoteCollection) -> RepoResult<()>;
}

/// Key-value backed note repository bound to one fixed key.
pub struct KvNoteRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvNoteRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl<S: KeyValueStore> NoteRepository for KvNoteRepository<S> {
    fn load_collection(&self) -> RepoResult<NoteCollection> {
        match self.store.get(self.key.as_str())? {
            Some(blob) => decode_collection(self.key.as_str(), blob.as_str()),
            None => Ok(NoteCollection::new()),
        }
    }

    fn save_collection(&self, collection: &NoteCollection) -> RepoResult<()> {
        let blob = encode_collection(collection)?;
        self.store.set(self.key.as_str(), blob.as_str())?;
        Ok(())
    }
}

/// Serializes a collection into its stored JSON form.
pub fn encode_collection(collection: &NoteCollection) -> RepoResult<String> {
    serde_json::to_string(collection.notes()).map_err(RepoError::Encode)
}

/// Parses a stored blob, rejecting anything not well-formed.
pub fn decode_collection(key: &str, blob: &str) -> RepoResult<NoteCollection> {
    serde_json::from_str::<NoteCollection>(blob).map_err(|err| RepoError::CorruptStore {
        key: key.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_collection, encode_collection, RepoError};
    use crate::model::note::{Note, NoteCollection, NoteId};

    #[test]
    fn decode_accepts_extra_fields() {
        let decoded = decode_collection(
            "k",
            r#"[{"id":"note-1-a","text":"hi","pinned":true}]"#,
        )
        .expect("extra fields should be ignored");
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.notes()[0].text, "hi");
    }

    #[test]
    fn decode_accepts_whitespace_ids_verbatim() {
        let decoded = decode_collection(
            "k",
            r#"[{"id":" ","text":"a"},{"id":"note-1-keep","text":"keep me"}]"#,
        )
        .expect("whitespace ids are opaque, not corrupt");
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.notes()[0].id.as_str(), " ");
        assert_eq!(
            decoded.get("note-1-keep").map(|n| n.text.as_str()),
            Some("keep me")
        );
    }

    #[test]
    fn decode_rejects_malformed_shapes() {
        for blob in [
            "not json",
            r#"{"id":"a","text":""}"#,
            r#"[{"id":"a"}]"#,
            r#"[{"text":"orphan"}]"#,
            r#"[{"id":7,"text":""}]"#,
            r#"[{"id":"","text":""}]"#,
            r#"[{"id":"a","text":""},{"id":"a","text":"dup"}]"#,
        ] {
            let err = decode_collection("workoutNotes", blob).unwrap_err();
            assert!(
                matches!(err, RepoError::CorruptStore { ref key, .. } if key == "workoutNotes"),
                "blob {blob} should be corrupt, got {err}"
            );
        }
    }

    #[test]
    fn encode_writes_id_and_text_fields() {
        let mut collection = NoteCollection::new();
        let mut note = Note::new(NoteId::parse("note-1-abc").unwrap());
        note.text = "Pushups 3x10".to_string();
        collection.push(note).unwrap();

        let blob = encode_collection(&collection).unwrap();
        let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(json[0]["id"], "note-1-abc");
        assert_eq!(json[0]["text"], "Pushups 3x10");
    }
}
