//! Undo/redo command history
//!
//! Every editing operation is recorded as a reversible [`Command`]
//! carrying the state it replaced. Chord application groups its
//! per-string edits into a single [`Command::Batch`] so it undoes in
//! one step.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::TabError;
use crate::models::core::{Fret, FretSelection, Note, TabDocument};
use crate::models::string_id::StringId;

/// Represents a reversible edit command
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Set (or replace) the note at a position
    SetNote {
        string: StringId,
        fret: Fret,
        note: Note,
        /// The note previously at this position, for restoration
        previous: Option<Note>,
    },
    /// Remove the note at a position
    ClearNote {
        string: StringId,
        fret: Fret,
        /// The removed note, for restoration
        removed: Note,
    },
    /// Remove every note
    ClearAll {
        /// The full selection before clearing
        previous: FretSelection,
    },
    /// Change the document title
    SetTitle {
        previous: Option<String>,
        title: Option<String>,
    },
    /// A group of commands applied together (e.g. a chord shape)
    Batch { commands: Vec<Command> },
}

impl Command {
    /// Apply this command to the document
    pub fn execute(&self, document: &mut TabDocument) {
        match self {
            Command::SetNote {
                string, fret, note, ..
            } => {
                document.selection.set(*string, *fret, note.clone());
            }
            Command::ClearNote { string, fret, .. } => {
                document.selection.clear(*string, *fret);
            }
            Command::ClearAll { .. } => {
                document.selection.clear_all();
            }
            Command::SetTitle { title, .. } => {
                document.title = title.clone();
            }
            Command::Batch { commands } => {
                for command in commands {
                    command.execute(document);
                }
            }
        }
    }

    /// Reverse this command on the document
    pub fn undo(&self, document: &mut TabDocument) {
        match self {
            Command::SetNote {
                string,
                fret,
                previous,
                ..
            } => match previous {
                Some(note) => {
                    document.selection.set(*string, *fret, note.clone());
                }
                None => {
                    document.selection.clear(*string, *fret);
                }
            },
            Command::ClearNote {
                string,
                fret,
                removed,
            } => {
                document.selection.set(*string, *fret, removed.clone());
            }
            Command::ClearAll { previous } => {
                document.selection = previous.clone();
            }
            Command::SetTitle { previous, .. } => {
                document.title = previous.clone();
            }
            Command::Batch { commands } => {
                // Undo in reverse order
                for command in commands.iter().rev() {
                    command.undo(document);
                }
            }
        }
    }
}

/// Manages undo/redo command history with a bounded stack
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UndoStack {
    /// Stack of commands that can be undone
    commands: VecDeque<Command>,
    /// Current position in the stack (for redo support)
    current_index: usize,
    /// Maximum number of commands to keep in history
    max_size: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(100)
    }
}

impl UndoStack {
    /// Create a new undo stack with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            commands: VecDeque::new(),
            current_index: 0,
            max_size,
        }
    }

    /// Record an already-applied command
    pub fn push(&mut self, command: Command) {
        // Truncate any redo history when a new command is added
        self.commands.truncate(self.current_index);
        self.commands.push_back(command);
        self.current_index = self.commands.len();

        // Enforce max size
        if self.commands.len() > self.max_size {
            self.commands.pop_front();
            self.current_index -= 1;
        }
    }

    /// Undo the last command
    pub fn undo(&mut self, document: &mut TabDocument) -> Result<(), TabError> {
        if !self.can_undo() {
            return Err(TabError::History("no undo history available".to_string()));
        }

        self.current_index -= 1;
        self.commands[self.current_index].undo(document);
        Ok(())
    }

    /// Redo the last undone command
    pub fn redo(&mut self, document: &mut TabDocument) -> Result<(), TabError> {
        if !self.can_redo() {
            return Err(TabError::History("no redo history available".to_string()));
        }

        self.commands[self.current_index].execute(document);
        self.current_index += 1;
        Ok(())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.current_index < self.commands.len()
    }

    /// Clear all undo history
    pub fn clear(&mut self) {
        self.commands.clear();
        self.current_index = 0;
    }

    /// Get the number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.current_index
    }

    /// Get the number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.commands.len() - self.current_index
    }
}
