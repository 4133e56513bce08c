//! Pure render functions from page state to display rows.
//!
//! Nothing here touches storage; callers pass in data they already loaded.

use crate::model::note::Note;
use crate::service::preference_service::Difficulty;

pub const NOTE_INPUT_PLACEHOLDER: &str = "Enter your note here...";
pub const DELETE_NOTE_LABEL: &str = "Delete";

/// One editable note row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub note_id: String,
    pub value: String,
    pub placeholder: &'static str,
    pub delete_label: &'static str,
}

/// Labels and visibility flags for the difficulty toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyView {
    pub level_label: &'static str,
    pub info: &'static str,
    pub show_beginner_sets: bool,
    pub show_intermediate_sets: bool,
}

/// Maps notes to rows, preserving order.
pub fn render_notes(notes: &[Note]) -> Vec<NoteRow> {
    notes
        .iter()
        .map(|note| NoteRow {
            note_id: note.id.to_string(),
            value: note.text.clone(),
            placeholder: NOTE_INPUT_PLACEHOLDER,
            delete_label: DELETE_NOTE_LABEL,
        })
        .collect()
}

pub fn render_difficulty(difficulty: Difficulty) -> DifficultyView {
    match difficulty {
        Difficulty::Beginner => DifficultyView {
            level_label: "Beginner",
            info: "Showing beginner-friendly sets and reps. Click the button to switch to intermediate.",
            show_beginner_sets: true,
            show_intermediate_sets: false,
        },
        Difficulty::Intermediate => DifficultyView {
            level_label: "Intermediate",
            info: "Showing intermediate sets and reps. Click the button to switch to beginner.",
            show_beginner_sets: false,
            show_intermediate_sets: true,
        },
    }
}
