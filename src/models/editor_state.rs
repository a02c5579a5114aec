//! Editor state management
//!
//! This module contains the EditorState struct which represents the
//! complete state of the editor: the document being edited, the display
//! options, the UI language, and the undo history.
//!
//! This is the WASM-owned source of truth for all editor state.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::i18n::Language;
use crate::models::chords::chord_by_key;
use crate::models::core::{Fret, FretSelection, Note, RenderOptions, TabDocument};
use crate::models::string_id::StringId;
use crate::models::technique::Technique;
use crate::models::tuning::note_label;
use crate::parse::symbol::{CellSymbol, SymbolParser};
use crate::renderers::tab_text::render_tab;
use crate::undo::{Command, UndoStack};

/// Complete editor state (WASM-owned source of truth)
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct EditorState {
    /// The document being edited
    pub document: TabDocument,

    /// Display configuration for the renderer
    pub options: RenderOptions,

    /// Current UI language
    pub language: Language,

    /// Undo/redo history (not part of serialized snapshots)
    #[serde(skip)]
    undo_stack: UndoStack,
}

impl EditorState {
    /// Create a new editor state with an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command to the document and record it in the history
    fn apply(&mut self, command: Command) {
        command.execute(&mut self.document);
        self.undo_stack.push(command);
    }

    /// Select a note at (string, fret); the label comes from standard tuning
    pub fn add_note(&mut self, string: StringId, fret: Fret) -> Result<(), TabError> {
        let note = Note::new(note_label(string, fret)?);
        self.apply(Command::SetNote {
            string,
            fret,
            previous: self.document.selection.get(string, fret).cloned(),
            note,
        });
        Ok(())
    }

    /// Select a note carrying a technique annotation
    pub fn add_note_with_technique(
        &mut self,
        string: StringId,
        fret: Fret,
        technique: Technique,
    ) -> Result<(), TabError> {
        let note = Note::with_technique(note_label(string, fret)?, technique);
        self.apply(Command::SetNote {
            string,
            fret,
            previous: self.document.selection.get(string, fret).cloned(),
            note,
        });
        Ok(())
    }

    /// Apply one typed grid-cell value to a string
    ///
    /// Empty and muted cells are no-ops; a standalone technique mark is
    /// rejected because it carries no fret to attach to.
    pub fn enter_symbol(&mut self, string: StringId, input: &str) -> Result<(), TabError> {
        match SymbolParser::new().parse(input)? {
            CellSymbol::Empty | CellSymbol::Muted => Ok(()),
            CellSymbol::Fret(fret) => self.add_note(string, fret),
            CellSymbol::FrettedTechnique { fret, technique } => {
                self.add_note_with_technique(string, fret, technique)
            }
            CellSymbol::Technique(_) => Err(TabError::InvalidInput {
                input: input.to_string(),
                reason: "technique mark needs a fret number".to_string(),
            }),
        }
    }

    /// Deselect the note at (string, fret); no-op if nothing is selected there
    pub fn clear_note(&mut self, string: StringId, fret: Fret) {
        if let Some(removed) = self.document.selection.get(string, fret).cloned() {
            self.apply(Command::ClearNote {
                string,
                fret,
                removed,
            });
        }
    }

    /// Deselect every note; no-op on an already empty selection
    pub fn clear_all(&mut self) {
        if !self.document.selection.is_empty() {
            self.apply(Command::ClearAll {
                previous: self.document.selection.clone(),
            });
        }
    }

    /// Set or clear the document title
    pub fn set_title(&mut self, title: Option<String>) {
        if self.document.title != title {
            self.apply(Command::SetTitle {
                previous: self.document.title.clone(),
                title,
            });
        }
    }

    /// Apply a chord shape from the reference library as one undo step
    ///
    /// Each sounded string gets the shape's fret; muted strings are left
    /// untouched.
    pub fn apply_chord(&mut self, key: &str) -> Result<(), TabError> {
        let chord = chord_by_key(key).ok_or_else(|| TabError::UnknownChord(key.to_string()))?;

        let mut commands = Vec::new();
        for (string, fret) in chord.sounded() {
            commands.push(Command::SetNote {
                string,
                fret,
                previous: self.document.selection.get(string, fret).cloned(),
                note: Note::new(note_label(string, fret)?),
            });
        }

        self.apply(Command::Batch { commands });
        Ok(())
    }

    /// Undo the most recent edit
    pub fn undo(&mut self) -> Result<(), TabError> {
        self.undo_stack.undo(&mut self.document)
    }

    /// Redo the most recently undone edit
    pub fn redo(&mut self) -> Result<(), TabError> {
        self.undo_stack.redo(&mut self.document)
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    /// Render the current document with the current display options
    pub fn render(&self) -> String {
        render_tab(&self.document, &self.options)
    }

    /// Replace the document with a loaded snapshot
    ///
    /// Loading establishes a new baseline, so the undo history is reset.
    pub fn load_snapshot(&mut self, title: Option<String>, selection: FretSelection) {
        self.document = TabDocument { title, selection };
        self.undo_stack.clear();
    }

    pub fn set_show_note_names(&mut self, value: bool) {
        self.options.show_note_names = value;
    }

    pub fn set_use_string_numbers(&mut self, value: bool) {
        self.options.use_string_numbers = value;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}
