use clap::{Parser, Subcommand};
use pagenotes_core::config::DEFAULT_NOTES_KEY;
use pagenotes_core::{default_log_level, CoreConfig};
use std::path::PathBuf;

pub const DEFAULT_DB_FILE_NAME: &str = "pagenotes.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "pagenotes")]
#[command(about = "Workout page notes, difficulty preference and visit counter")]
#[command(version)]
pub struct Cli {
    /// SQLite file holding the page's key-value store
    #[arg(long, env = "PAGENOTES_DB", default_value = DEFAULT_DB_FILE_NAME)]
    pub db: PathBuf,

    /// Storage key for the note collection
    #[arg(long, default_value = DEFAULT_NOTES_KEY)]
    pub notes_key: String,

    /// One of trace|debug|info|warn|error
    #[arg(long, env = "PAGENOTES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, env = "PAGENOTES_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage saved notes
    #[command(subcommand)]
    Notes(NotesCommand),
    /// Show or toggle the workout difficulty
    #[command(subcommand)]
    Difficulty(DifficultyCommand),
    /// Count one page view and print the total
    Visit,
    /// Print the page summary
    Status,
}

#[derive(Debug, Subcommand)]
pub enum NotesCommand {
    /// List notes in insertion order
    List,
    /// Add an empty note and print its id
    Add,
    /// Replace the text of a note
    Edit { id: String, text: String },
    /// Delete a note
    Rm { id: String },
    /// Drop every note, including an unreadable collection
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum DifficultyCommand {
    Show,
    Toggle,
}

impl Cli {
    pub fn core_config(&self) -> CoreConfig {
        CoreConfig {
            notes_key: self.notes_key.clone(),
            db_path: Some(self.db.clone()),
            log_level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: self.log_dir.clone(),
            ..CoreConfig::default()
        }
    }
}
