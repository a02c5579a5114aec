//! WASM API for editing operations
//!
//! This module provides the JavaScript-facing API for mutating the
//! module-owned editor state. Every mutating call returns the freshly
//! rendered tab text so the host can repaint directly from the result.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{api_error, lock_editor, parse_string_id, serialize, validate_fret};
use crate::i18n::{self, Language};
use crate::models::core::Fret;
use crate::models::technique::Technique;
use crate::models::tuning;
use crate::parse::symbol::SymbolParser;
use crate::storage;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Start a fresh, untitled tab (display options and language persist)
#[wasm_bindgen(js_name = newTab)]
pub fn new_tab() -> Result<String, JsValue> {
    wasm_info!("newTab called");
    let mut editor = lock_editor()?;
    editor.load_snapshot(None, Default::default());
    Ok(editor.render())
}

/// Select a note at (string, fret), labelled from standard tuning
#[wasm_bindgen(js_name = addNote)]
pub fn add_note(string: &str, fret: Fret) -> Result<String, JsValue> {
    wasm_log!("addNote called: string={}, fret={}", string, fret);
    let string = parse_string_id(string)?;
    validate_fret(fret)?;

    let mut editor = lock_editor()?;
    editor.add_note(string, fret).map_err(api_error)?;
    Ok(editor.render())
}

/// Select a note carrying a technique annotation (symbol: h p b / \ ~)
#[wasm_bindgen(js_name = addNoteWithTechnique)]
pub fn add_note_with_technique(
    string: &str,
    fret: Fret,
    technique: &str,
) -> Result<String, JsValue> {
    wasm_log!(
        "addNoteWithTechnique called: string={}, fret={}, technique={}",
        string,
        fret,
        technique
    );
    let string = parse_string_id(string)?;
    validate_fret(fret)?;
    let technique: Technique = technique.parse().map_err(|e: String| api_error(e))?;

    let mut editor = lock_editor()?;
    editor
        .add_note_with_technique(string, fret, technique)
        .map_err(api_error)?;
    Ok(editor.render())
}

/// Apply one typed grid-cell value to a string
#[wasm_bindgen(js_name = enterCell)]
pub fn enter_cell(string: &str, value: &str) -> Result<String, JsValue> {
    wasm_log!("enterCell called: string={}, value='{}'", string, value);
    let string = parse_string_id(string)?;

    let mut editor = lock_editor()?;
    editor.enter_symbol(string, value).map_err(api_error)?;
    Ok(editor.render())
}

/// Check a typed cell value against the allow-list without applying it
#[wasm_bindgen(js_name = isCellInputValid)]
pub fn is_cell_input_valid(value: &str) -> bool {
    SymbolParser::new().validate(value).is_ok()
}

/// Deselect the note at (string, fret)
#[wasm_bindgen(js_name = clearNote)]
pub fn clear_note(string: &str, fret: Fret) -> Result<String, JsValue> {
    wasm_log!("clearNote called: string={}, fret={}", string, fret);
    let string = parse_string_id(string)?;

    let mut editor = lock_editor()?;
    editor.clear_note(string, fret);
    Ok(editor.render())
}

/// Deselect every note
#[wasm_bindgen(js_name = clearTab)]
pub fn clear_tab() -> Result<String, JsValue> {
    wasm_info!("clearTab called");
    let mut editor = lock_editor()?;
    editor.clear_all();
    Ok(editor.render())
}

/// Set the tab title; an empty string clears it
#[wasm_bindgen(js_name = setTitle)]
pub fn set_title(title: &str) -> Result<String, JsValue> {
    wasm_log!("setTitle called: '{}'", title);
    let mut editor = lock_editor()?;
    let title = (!title.is_empty()).then(|| title.to_string());
    editor.set_title(title);
    Ok(editor.render())
}

/// Apply a chord shape from the reference library
#[wasm_bindgen(js_name = applyChord)]
pub fn apply_chord(key: &str) -> Result<String, JsValue> {
    wasm_info!("applyChord called: key={}", key);
    let mut editor = lock_editor()?;
    editor.apply_chord(key).map_err(api_error)?;
    Ok(editor.render())
}

/// Render the current document with the current display options
#[wasm_bindgen(js_name = renderTab)]
pub fn render_tab() -> Result<String, JsValue> {
    let editor = lock_editor()?;
    Ok(editor.render())
}

/// Current selection as a plain object (string id -> fret -> note)
#[wasm_bindgen(js_name = getSelection)]
pub fn get_selection() -> Result<JsValue, JsValue> {
    let editor = lock_editor()?;
    serialize(&editor.document.selection, "selection serialization failed")
}

/// Standard-tuning note label for a fretboard position
#[wasm_bindgen(js_name = noteLabelAt)]
pub fn note_label_at(string: &str, fret: Fret) -> Result<String, JsValue> {
    let string = parse_string_id(string)?;
    tuning::note_label(string, fret).map_err(api_error)
}

/// Toggle between note names and fret numbers in the rendering
#[wasm_bindgen(js_name = setShowNoteNames)]
pub fn set_show_note_names(value: bool) -> Result<String, JsValue> {
    wasm_log!("setShowNoteNames called: {}", value);
    let mut editor = lock_editor()?;
    editor.set_show_note_names(value);
    Ok(editor.render())
}

/// Toggle between string numbers and letter names as line labels
#[wasm_bindgen(js_name = setUseStringNumbers)]
pub fn set_use_string_numbers(value: bool) -> Result<String, JsValue> {
    wasm_log!("setUseStringNumbers called: {}", value);
    let mut editor = lock_editor()?;
    editor.set_use_string_numbers(value);
    Ok(editor.render())
}

/// Undo the most recent edit
#[wasm_bindgen(js_name = undo)]
pub fn undo() -> Result<String, JsValue> {
    wasm_info!("undo called");
    let mut editor = lock_editor()?;
    editor.undo().map_err(api_error)?;
    Ok(editor.render())
}

/// Redo the most recently undone edit
#[wasm_bindgen(js_name = redo)]
pub fn redo() -> Result<String, JsValue> {
    wasm_info!("redo called");
    let mut editor = lock_editor()?;
    editor.redo().map_err(api_error)?;
    Ok(editor.render())
}

#[wasm_bindgen(js_name = canUndo)]
pub fn can_undo() -> Result<bool, JsValue> {
    Ok(lock_editor()?.can_undo())
}

#[wasm_bindgen(js_name = canRedo)]
pub fn can_redo() -> Result<bool, JsValue> {
    Ok(lock_editor()?.can_redo())
}

// ============================================================================
// Language
// ============================================================================

/// Restore the persisted language choice, defaulting to English
#[wasm_bindgen(js_name = initLanguage)]
pub fn init_language() -> Result<String, JsValue> {
    let mut editor = lock_editor()?;
    match storage::load_language() {
        Ok(Some(language)) => editor.set_language(language),
        Ok(None) => {}
        Err(e) => wasm_warn!("language restore failed: {}", e),
    }
    Ok(editor.language.to_string())
}

/// Set and persist the UI language ("en" or "es")
#[wasm_bindgen(js_name = setLanguage)]
pub fn set_language(language: &str) -> Result<(), JsValue> {
    wasm_info!("setLanguage called: {}", language);
    let language: Language = language.parse().map_err(|e: String| api_error(e))?;

    let mut editor = lock_editor()?;
    editor.set_language(language);
    if let Err(e) = storage::persist_language(language) {
        wasm_warn!("language persist failed: {}", e);
    }
    Ok(())
}

#[wasm_bindgen(js_name = getLanguage)]
pub fn get_language() -> Result<String, JsValue> {
    Ok(lock_editor()?.language.to_string())
}

/// Translate a UI string key in the current language
#[wasm_bindgen(js_name = translate)]
pub fn translate(key: &str) -> Result<String, JsValue> {
    let editor = lock_editor()?;
    Ok(i18n::translate(editor.language, key).to_string())
}
