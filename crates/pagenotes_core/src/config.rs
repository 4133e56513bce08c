//! Core configuration.
//!
//! # Responsibility
//! - Hold the storage keys and store location used by one page session.
//! - Replace free-standing page globals with one explicit value.
//!
//! # Invariants
//! - All storage keys are non-empty and pairwise distinct.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Storage key for the note collection blob.
pub const DEFAULT_NOTES_KEY: &str = "workoutNotes";
/// Storage key for the difficulty preference.
pub const DEFAULT_DIFFICULTY_KEY: &str = "difficultyPreference";
/// Storage key for the page-view counter.
pub const DEFAULT_VISIT_KEY: &str = "reviewCount";

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyKey(&'static str),
    DuplicateKey(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey(field) => write!(f, "storage key `{field}` must not be empty"),
            Self::DuplicateKey(key) => {
                write!(f, "storage key `{key}` is used for more than one slot")
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings for one page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub notes_key: String,
    pub difficulty_key: String,
    pub visit_key: String,
    /// SQLite store file; `None` keeps everything in memory.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            notes_key: DEFAULT_NOTES_KEY.to_string(),
            difficulty_key: DEFAULT_DIFFICULTY_KEY.to_string(),
            visit_key: DEFAULT_VISIT_KEY.to_string(),
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Checks key invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys = [
            ("notes_key", self.notes_key.as_str()),
            ("difficulty_key", self.difficulty_key.as_str()),
            ("visit_key", self.visit_key.as_str()),
        ];
        for (field, key) in keys {
            if key.trim().is_empty() {
                return Err(ConfigError::EmptyKey(field));
            }
        }
        for (index, (_, key)) in keys.iter().enumerate() {
            if keys[index + 1..].iter().any(|(_, other)| other == key) {
                return Err(ConfigError::DuplicateKey((*key).to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};

    #[test]
    fn default_config_is_valid() {
        let config = CoreConfig::default();
        assert_eq!(config.notes_key, "workoutNotes");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_and_shared_keys() {
        let empty = CoreConfig {
            visit_key: " ".to_string(),
            ..CoreConfig::default()
        };
        assert_eq!(empty.validate(), Err(ConfigError::EmptyKey("visit_key")));

        let shared = CoreConfig {
            difficulty_key: "workoutNotes".to_string(),
            ..CoreConfig::default()
        };
        assert_eq!(
            shared.validate(),
            Err(ConfigError::DuplicateKey("workoutNotes".to_string()))
        );
    }
}
