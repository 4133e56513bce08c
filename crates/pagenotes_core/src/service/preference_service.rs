//! Workout difficulty preference.
//!
//! # Invariants
//! - Stored values are exactly `beginner` or `intermediate`.
//! - Anything else under the key, including absence, reads as `Beginner`.

use crate::kv::{KeyValueStore, KvResult};
use log::info;

const DIFFICULTY_BEGINNER: &str = "beginner";
const DIFFICULTY_INTERMEDIATE: &str = "intermediate";

/// Sets-and-reps level shown on the workout page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
}

impl Difficulty {
    /// Stable string stored in the key-value slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => DIFFICULTY_BEGINNER,
            Self::Intermediate => DIFFICULTY_INTERMEDIATE,
        }
    }

    /// Lenient parse used for stored values.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DIFFICULTY_INTERMEDIATE) => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Beginner => Self::Intermediate,
            Self::Intermediate => Self::Beginner,
        }
    }
}

/// Persisted difficulty preference bound to one key.
pub struct DifficultyService<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> DifficultyService<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Returns the stored preference, defaulting to `Beginner`.
    pub fn current(&self) -> KvResult<Difficulty> {
        let stored = self.store.get(self.key.as_str())?;
        Ok(Difficulty::from_stored(stored.as_deref()))
    }

    /// Returns whether a preference was ever saved.
    pub fn is_set(&self) -> KvResult<bool> {
        Ok(self.store.get(self.key.as_str())?.is_some())
    }

    pub fn set(&self, difficulty: Difficulty) -> KvResult<()> {
        self.store.set(self.key.as_str(), difficulty.as_str())?;
        info!(
            "event=difficulty_set module=preferences status=ok level={}",
            difficulty.as_str()
        );
        Ok(())
    }

    /// Flips the preference, persists it and returns the new value.
    pub fn toggle(&self) -> KvResult<Difficulty> {
        let next = self.current()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}
