use pagenotes_core::{
    CoreConfig, Difficulty, KeyValueStore, MemoryKeyValueStore, NotesPage, PageError, UiEvent,
};

#[test]
fn add_edit_delete_events_rerender_from_storage() {
    let kv = MemoryKeyValueStore::new();
    let page = NotesPage::new(&kv, &CoreConfig::default()).unwrap();

    let added = page.handle(UiEvent::AddNote).unwrap();
    assert!(added.applied);
    assert_eq!(added.view.notes.len(), 1);
    let id = added.view.notes[0].note_id.clone();
    assert_eq!(added.view.focus_note_id.as_deref(), Some(id.as_str()));

    let edited = page
        .handle(UiEvent::EditNote {
            id: id.clone(),
            text: "Row 4x12".to_string(),
        })
        .unwrap();
    assert!(edited.applied);
    assert_eq!(edited.view.notes[0].value, "Row 4x12");
    assert_eq!(edited.view.focus_note_id, None);

    let deleted = page.handle(UiEvent::DeleteNote { id: id.clone() }).unwrap();
    assert!(deleted.applied);
    assert!(deleted.view.notes.is_empty());

    let stale_edit = page
        .handle(UiEvent::EditNote {
            id,
            text: "late".to_string(),
        })
        .unwrap();
    assert!(!stale_edit.applied);
    assert!(stale_edit.view.notes.is_empty());
}

#[test]
fn toggle_difficulty_persists_across_page_instances() {
    let kv = MemoryKeyValueStore::new();
    let config = CoreConfig::default();
    {
        let page = NotesPage::new(&kv, &config).unwrap();
        assert_eq!(page.render().unwrap().difficulty.level_label, "Beginner");
        let toggled = page.handle(UiEvent::ToggleDifficulty).unwrap();
        assert_eq!(toggled.view.difficulty.level_label, "Intermediate");
    }

    let reloaded = NotesPage::new(&kv, &config).unwrap();
    let view = reloaded.render().unwrap();
    assert!(view.difficulty.show_intermediate_sets);
    assert_eq!(
        kv.get("difficultyPreference").unwrap().as_deref(),
        Some("intermediate")
    );
}

#[test]
fn status_reports_preference_and_note_count() {
    let kv = MemoryKeyValueStore::new();
    let page = NotesPage::new(&kv, &CoreConfig::default()).unwrap();

    let initial = page.status().unwrap();
    assert_eq!(initial.difficulty_preference, None);
    assert_eq!(initial.saved_notes, 0);

    page.handle(UiEvent::AddNote).unwrap();
    page.handle(UiEvent::AddNote).unwrap();
    page.handle(UiEvent::ToggleDifficulty).unwrap();

    let status = page.status().unwrap();
    assert_eq!(status.difficulty_preference, Some(Difficulty::Intermediate));
    assert_eq!(status.saved_notes, 2);
}

#[test]
fn visits_are_counted_under_their_own_key() {
    let kv = MemoryKeyValueStore::new();
    let page = NotesPage::new(&kv, &CoreConfig::default()).unwrap();

    assert_eq!(page.record_visit().unwrap(), 1);
    assert_eq!(page.record_visit().unwrap(), 2);
    assert_eq!(page.visit_count().unwrap(), 2);
    assert!(page.render().unwrap().notes.is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    let kv = MemoryKeyValueStore::new();
    let config = CoreConfig {
        visit_key: "workoutNotes".to_string(),
        ..CoreConfig::default()
    };

    assert!(matches!(
        NotesPage::new(&kv, &config),
        Err(PageError::Config(_))
    ));
}
