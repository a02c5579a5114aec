// Tab rendering contract: line shape, spacing arithmetic, display toggles

use tab_editor_wasm::models::core::{FretSelection, Note, RenderOptions, TabDocument};
use tab_editor_wasm::renderers::tab_text::render_tab;
use tab_editor_wasm::StringId;

fn document(title: Option<&str>, selection: FretSelection) -> TabDocument {
    TabDocument {
        title: title.map(str::to_string),
        selection,
    }
}

#[test]
fn test_empty_selection_empty_title() {
    let tab = render_tab(
        &document(None, FretSelection::new()),
        &RenderOptions::default(),
    );

    let lines: Vec<&str> = tab.lines().collect();
    assert_eq!(lines.len(), 6);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("{}|----------|", i + 1));
    }
}

#[test]
fn test_single_open_note_with_note_names() {
    let mut selection = FretSelection::new();
    selection.set(StringId::First, 0, Note::new("E4"));

    let tab = render_tab(&document(None, selection), &RenderOptions::default());
    assert_eq!(tab.lines().next().unwrap(), "1|E--------|");
}

#[test]
fn test_two_frets_with_fret_numbers() {
    let mut selection = FretSelection::new();
    selection.set(StringId::Sixth, 0, Note::new("E2"));
    selection.set(StringId::Sixth, 3, Note::new("G2"));

    let options = RenderOptions {
        show_note_names: false,
        ..Default::default()
    };
    let tab = render_tab(&document(None, selection), &options);
    assert_eq!(tab.lines().last().unwrap(), "6|0----3--------|");
}

#[test]
fn test_line_count_fixed_at_six() {
    let mut selection = FretSelection::new();
    selection.set(StringId::Second, 1, Note::new("C4"));

    let tab = render_tab(&document(None, selection), &RenderOptions::default());
    assert_eq!(tab.lines().count(), 6);

    let mut full = FretSelection::new();
    for string in StringId::ALL {
        full.set(string, 0, Note::new("E4"));
    }
    let tab = render_tab(&document(None, full), &RenderOptions::default());
    assert_eq!(tab.lines().count(), 6);
}

#[test]
fn test_title_prefixes_block() {
    let tab = render_tab(
        &document(Some("Intro Riff"), FretSelection::new()),
        &RenderOptions::default(),
    );
    let lines: Vec<&str> = tab.lines().collect();
    assert_eq!(lines[0], "Intro Riff");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "1|----------|");
}

#[test]
fn test_render_is_pure() {
    let mut selection = FretSelection::new();
    selection.set(StringId::Third, 2, Note::new("A3"));
    selection.set(StringId::Fourth, 5, Note::new("G3"));
    let doc = document(Some("Same"), selection);
    let options = RenderOptions::default();

    let first = render_tab(&doc, &options);
    let second = render_tab(&doc, &options);
    assert_eq!(first, second);
}

#[test]
fn test_higher_max_fret_widens_every_line() {
    let mut selection = FretSelection::new();
    selection.set(StringId::First, 2, Note::new("F#4/Gb4"));

    let options = RenderOptions {
        show_note_names: false,
        ..Default::default()
    };
    let narrow = render_tab(&document(None, selection.clone()), &options);

    selection.set(StringId::First, 10, Note::new("D5"));
    let wide = render_tab(&document(None, selection), &options);

    for (a, b) in narrow.lines().zip(wide.lines()) {
        assert!(b.len() > a.len(), "'{}' vs '{}'", a, b);
    }
}

#[test]
fn test_string_letters_when_numbers_disabled() {
    let options = RenderOptions {
        use_string_numbers: false,
        ..Default::default()
    };
    let tab = render_tab(&document(None, FretSelection::new()), &options);
    let lines: Vec<&str> = tab.lines().collect();
    assert_eq!(lines[0], "E|----------|");
    assert_eq!(lines[1], "B|----------|");
    assert_eq!(lines[5], "E|----------|");
}

#[test]
fn test_selection_accepts_stored_json_shape() {
    let json = r#"{"1": {"0": {"label": "E4", "technique": null},
                         "3": {"label": "G4", "technique": "h"}},
                   "6": {"3": {"label": "G2", "technique": null}}}"#;
    let selection: FretSelection = serde_json::from_str(json).unwrap();

    let options = RenderOptions {
        show_note_names: false,
        ..Default::default()
    };
    let tab = render_tab(&document(None, selection), &options);
    let lines: Vec<&str> = tab.lines().collect();
    // fret 0, then (3-1)*2 dashes, "3" plus hammer-on, then (3+5-4)*2 trailing
    assert_eq!(lines[0], "1|0----3h--------|");
    assert_eq!(lines[5], "6|------3--------|");
}
