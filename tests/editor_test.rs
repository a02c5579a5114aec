// Editing operations end to end: clicks, typed cells, chords, undo/redo

use tab_editor_wasm::models::editor_state::EditorState;
use tab_editor_wasm::StringId;

#[test]
fn test_click_then_render() {
    let mut state = EditorState::new();
    state.add_note(StringId::First, 0).unwrap();
    state.add_note(StringId::Second, 1).unwrap();

    let tab = state.render();
    let lines: Vec<&str> = tab.lines().collect();
    assert_eq!(lines[0], "1|E----------|");
    assert_eq!(lines[1], "2|--C--------|");
}

#[test]
fn test_typed_cells_and_clicks_share_one_selection() {
    let mut state = EditorState::new();
    state.add_note(StringId::First, 0).unwrap();
    state.enter_symbol(StringId::Sixth, "3").unwrap();
    state.enter_symbol(StringId::Sixth, "5~").unwrap();

    assert_eq!(state.document.selection.note_count(), 3);
    assert_eq!(
        state.document.selection.get(StringId::Sixth, 3).unwrap().label,
        "G2"
    );
    assert!(state
        .document
        .selection
        .get(StringId::Sixth, 5)
        .unwrap()
        .technique
        .is_some());
}

#[test]
fn test_undo_redo_walk() {
    let mut state = EditorState::new();
    state.add_note(StringId::First, 0).unwrap();
    state.add_note(StringId::Fifth, 2).unwrap();
    state.clear_note(StringId::First, 0);

    assert_eq!(state.document.selection.note_count(), 1);

    state.undo().unwrap();
    assert_eq!(state.document.selection.note_count(), 2);

    state.undo().unwrap();
    state.undo().unwrap();
    assert!(state.document.selection.is_empty());
    assert!(state.undo().is_err());

    state.redo().unwrap();
    state.redo().unwrap();
    state.redo().unwrap();
    assert_eq!(state.document.selection.note_count(), 1);
    assert!(state.redo().is_err());
}

#[test]
fn test_chord_apply_and_single_undo() {
    let mut state = EditorState::new();
    state.apply_chord("Em").unwrap();

    // E minor sounds all six strings
    assert_eq!(state.document.selection.note_count(), 6);
    assert_eq!(
        state.document.selection.get(StringId::Fourth, 2).unwrap().label,
        "E3"
    );

    state.undo().unwrap();
    assert!(state.document.selection.is_empty());
}

#[test]
fn test_chord_over_existing_notes_undoes_cleanly() {
    let mut state = EditorState::new();
    state.add_note(StringId::Second, 3).unwrap();
    let before = state.document.selection.clone();

    state.apply_chord("C").unwrap();
    // C major puts fret 1 on the B string; fret 3 stays selected too
    assert!(state.document.selection.get(StringId::Second, 1).is_some());
    assert!(state.document.selection.get(StringId::Second, 3).is_some());

    state.undo().unwrap();
    assert_eq!(state.document.selection, before);
}

#[test]
fn test_render_reflects_edits_immediately() {
    let mut state = EditorState::new();
    let empty = state.render();

    state.add_note(StringId::Third, 2).unwrap();
    let with_note = state.render();
    assert_ne!(empty, with_note);

    state.undo().unwrap();
    assert_eq!(state.render(), empty);
}

#[test]
fn test_invalid_inputs_leave_state_untouched() {
    let mut state = EditorState::new();
    state.add_note(StringId::First, 0).unwrap();
    let snapshot = state.document.clone();

    assert!(state.add_note(StringId::First, 40).is_err());
    assert!(state.enter_symbol(StringId::First, "1234").is_err());
    assert!(state.enter_symbol(StringId::First, "?").is_err());
    assert!(state.apply_chord("H7").is_err());

    assert_eq!(state.document, snapshot);
}
