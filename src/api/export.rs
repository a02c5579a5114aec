//! Export and persistence operations for the WASM API
//!
//! This module provides the functions behind the export buttons and the
//! saved-tabs panel: plain-text export for the clipboard path, the
//! saved-tab library over browser local storage, and the chord and
//! strumming reference data.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{api_error, lock_editor, serialize};
use crate::models::chords::{chord_by_key, CHORDS};
use crate::models::strumming::STRUMMING_PATTERNS;
use crate::renderers::chord_chart;
use crate::storage;
use crate::{wasm_info, wasm_log};

// ============================================================================
// Text Export
// ============================================================================

/// Export the current tab as plain text
///
/// The result is handed verbatim to the clipboard or to the host's
/// image-capture path; whitespace must be preserved exactly.
#[wasm_bindgen(js_name = exportTabText)]
pub fn export_tab_text() -> Result<String, JsValue> {
    wasm_info!("exportTabText called");
    let editor = lock_editor()?;
    let text = editor.render();
    wasm_log!("  exported {} bytes", text.len());
    Ok(text)
}

// ============================================================================
// Saved Tabs
// ============================================================================

/// Save the current selection under a name; returns the new snapshot id
#[wasm_bindgen(js_name = saveTab)]
pub fn save_tab(name: &str) -> Result<String, JsValue> {
    wasm_info!("saveTab called: name='{}'", name);

    let editor = lock_editor()?;
    let mut library = storage::load_library().map_err(api_error)?;
    let id = library
        .save(name, &editor.document.selection)
        .map_err(api_error)?
        .id
        .clone();
    storage::persist_library(&library).map_err(api_error)?;

    wasm_info!("  saved tab {} ({} total)", id, library.len());
    Ok(id)
}

/// List all saved tabs (id, name, selection, created_at)
#[wasm_bindgen(js_name = listSavedTabs)]
pub fn list_saved_tabs() -> Result<JsValue, JsValue> {
    let library = storage::load_library().map_err(api_error)?;
    serialize(&library.tabs(), "saved-tab list serialization failed")
}

/// Load a saved tab into the editor; returns the rendered text
#[wasm_bindgen(js_name = loadTab)]
pub fn load_tab(id: &str) -> Result<String, JsValue> {
    wasm_info!("loadTab called: id={}", id);

    let library = storage::load_library().map_err(api_error)?;
    let tab = library
        .get(id)
        .ok_or_else(|| api_error(format!("no saved tab with id '{}'", id)))?;

    let mut editor = lock_editor()?;
    editor.load_snapshot(Some(tab.name.clone()), tab.selection.clone());
    Ok(editor.render())
}

/// Delete a saved tab by id
#[wasm_bindgen(js_name = deleteTab)]
pub fn delete_tab(id: &str) -> Result<(), JsValue> {
    wasm_info!("deleteTab called: id={}", id);

    let mut library = storage::load_library().map_err(api_error)?;
    library.delete(id).map_err(api_error)?;
    storage::persist_library(&library).map_err(api_error)
}

// ============================================================================
// Reference Data
// ============================================================================

/// The chord reference library (key, name, frets per string)
#[wasm_bindgen(js_name = listChords)]
pub fn list_chords() -> Result<JsValue, JsValue> {
    serialize(&CHORDS.as_slice(), "chord list serialization failed")
}

/// Monospace chart for one chord shape
#[wasm_bindgen(js_name = chordChart)]
pub fn chord_chart_text(key: &str) -> Result<String, JsValue> {
    let chord =
        chord_by_key(key).ok_or_else(|| api_error(format!("unknown chord '{}'", key)))?;
    Ok(chord_chart(chord))
}

/// The strumming-pattern reference library
#[wasm_bindgen(js_name = listStrummingPatterns)]
pub fn list_strumming_patterns() -> Result<JsValue, JsValue> {
    serialize(
        &STRUMMING_PATTERNS.as_slice(),
        "strumming pattern serialization failed",
    )
}
