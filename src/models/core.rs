//! Core data structures for the tablature editor
//!
//! This module defines the sparse fret-selection model that both
//! interaction modes (fretboard clicks and typed grid cells) edit,
//! and the document/options pair the renderer consumes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::string_id::StringId;
use crate::models::technique::Technique;

/// Fret position along a string; 0 is the open string
pub type Fret = u8;

/// One selected note: its pitch label plus an optional technique
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    /// Pitch label under standard tuning, e.g. "E4" or "F#4/Gb4"
    pub label: String,

    /// Playing-technique annotation, if any
    pub technique: Option<Technique>,
}

impl Note {
    /// Create a plain note with no technique annotation
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            technique: None,
        }
    }

    /// Create a note carrying a technique annotation
    pub fn with_technique(label: impl Into<String>, technique: Technique) -> Self {
        Self {
            label: label.into(),
            technique: Some(technique),
        }
    }
}

/// Sparse per-string selection of fretted notes
///
/// Both maps are ordered, so iteration yields strings in display order
/// and frets in ascending order without an explicit sort step.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FretSelection {
    strings: BTreeMap<StringId, BTreeMap<Fret, Note>>,
}

impl FretSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the note at a position, returning the previous note
    pub fn set(&mut self, string: StringId, fret: Fret, note: Note) -> Option<Note> {
        self.strings.entry(string).or_default().insert(fret, note)
    }

    /// Remove the note at a position, returning it
    ///
    /// A string left with no notes is dropped from the map entirely, so
    /// an emptied string is indistinguishable from a never-touched one.
    pub fn clear(&mut self, string: StringId, fret: Fret) -> Option<Note> {
        let notes = self.strings.get_mut(&string)?;
        let removed = notes.remove(&fret);
        if notes.is_empty() {
            self.strings.remove(&string);
        }
        removed
    }

    /// Note at a position, if selected
    pub fn get(&self, string: StringId, fret: Fret) -> Option<&Note> {
        self.strings.get(&string)?.get(&fret)
    }

    /// Selected frets for one string, ascending; empty if none
    pub fn frets_on(&self, string: StringId) -> Vec<(Fret, &Note)> {
        self.strings
            .get(&string)
            .map(|notes| notes.iter().map(|(f, n)| (*f, n)).collect())
            .unwrap_or_default()
    }

    /// Highest selected fret across all strings; 0 if the selection is empty
    pub fn max_fret(&self) -> Fret {
        self.strings
            .values()
            .flat_map(|notes| notes.keys().copied())
            .max()
            .unwrap_or(0)
    }

    /// True if no string has a selected note
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Total number of selected notes
    pub fn note_count(&self) -> usize {
        self.strings.values().map(|notes| notes.len()).sum()
    }

    /// Remove every note
    pub fn clear_all(&mut self) {
        self.strings.clear();
    }
}

/// A renderable tab: optional title plus a fret-selection snapshot
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TabDocument {
    /// Title of the tab; empty or absent titles render no title line
    pub title: Option<String>,

    /// The selected notes
    pub selection: FretSelection,
}

impl TabDocument {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Title trimmed to a renderable value, if non-empty
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// Display configuration for the tab renderer
///
/// Both flags are independent and affect formatting only, never the
/// underlying selection.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit simplified note names instead of fret numbers
    pub show_note_names: bool,

    /// Label lines with string numbers ("1".."6") instead of letter names
    pub use_string_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_note_names: true,
            use_string_numbers: true,
        }
    }
}
