//! Terminal front end for the workout page.
//!
//! # Responsibility
//! - Parse arguments, open the durable store and dispatch page events.
//! - The only place that writes to stdout/stderr or picks exit codes.

mod cli;

use clap::Parser;
use cli::{Cli, Command, DifficultyCommand, NotesCommand};
use log::error;
use pagenotes_core::db::{open_db, open_db_in_memory};
use pagenotes_core::{
    init_logging, CoreConfig, Difficulty, NoteRow, NotesPage, PageView, SqliteKeyValueStore,
    UiEvent,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!("event=cli_run module=cli status=error error={message}");
            eprintln!("pagenotes: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let config = cli.core_config();
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level.as_str(), log_dir)?;
    }

    let conn = match config.db_path.as_deref() {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
    .map_err(|err| err.to_string())?;
    let kv = SqliteKeyValueStore::try_new(&conn).map_err(|err| err.to_string())?;
    let page = NotesPage::new(&kv, &config).map_err(|err| err.to_string())?;

    execute(&page, &config, &cli.command).map_err(|err| err.to_string())
}

fn execute(
    page: &NotesPage<'_, SqliteKeyValueStore<'_>>,
    config: &CoreConfig,
    command: &Command,
) -> Result<String, pagenotes_core::PageError> {
    let output = match command {
        Command::Notes(NotesCommand::List) => format_rows(&page.render()?.notes),
        Command::Notes(NotesCommand::Add) => {
            let outcome = page.handle(UiEvent::AddNote)?;
            outcome.view.focus_note_id.unwrap_or_default()
        }
        Command::Notes(NotesCommand::Edit { id, text }) => {
            let outcome = page.handle(UiEvent::EditNote {
                id: id.clone(),
                text: text.clone(),
            })?;
            applied_message(outcome.applied, "updated", id)
        }
        Command::Notes(NotesCommand::Rm { id }) => {
            let outcome = page.handle(UiEvent::DeleteNote { id: id.clone() })?;
            applied_message(outcome.applied, "deleted", id)
        }
        Command::Notes(NotesCommand::Reset) => {
            page.notes().reset()?;
            format!("cleared `{}`", config.notes_key)
        }
        Command::Difficulty(DifficultyCommand::Show) => format_difficulty(&page.render()?),
        Command::Difficulty(DifficultyCommand::Toggle) => {
            format_difficulty(&page.handle(UiEvent::ToggleDifficulty)?.view)
        }
        Command::Visit => page.record_visit()?.to_string(),
        Command::Status => {
            let status = page.status()?;
            format!(
                "Difficulty Preference: {}\nSaved Notes: {}\nVisits: {}",
                status
                    .difficulty_preference
                    .map_or("Not set", Difficulty::as_str),
                status.saved_notes,
                page.visit_count()?
            )
        }
    };
    Ok(output)
}

fn format_rows(rows: &[NoteRow]) -> String {
    if rows.is_empty() {
        return "(no notes)".to_string();
    }
    rows.iter()
        .map(|row| {
            let value = if row.value.is_empty() {
                format!("<{}>", row.placeholder)
            } else {
                row.value.clone()
            };
            format!("{}\t{}", row.note_id, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_difficulty(view: &PageView) -> String {
    format!("{}: {}", view.difficulty.level_label, view.difficulty.info)
}

fn applied_message(applied: bool, verb: &str, id: &str) -> String {
    if applied {
        format!("{verb} {id}")
    } else {
        format!("no note with id {id}")
    }
}
