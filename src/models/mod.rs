//! Models module for the tablature editor
//!
//! This module contains the data models for fret selections,
//! standard-tuning pitch lookup, and the reference libraries
//! (chords, strumming patterns).

pub mod core;
pub mod string_id;
pub mod tuning;
pub mod technique;
pub mod chords;
pub mod strumming;
pub mod editor_state;

// Re-export commonly used types
pub use self::core::*;
pub use chords::{chord_by_key, ChordShape, CHORDS};
pub use editor_state::EditorState;
pub use string_id::StringId;
pub use strumming::{Strum, StrumPattern, STRUMMING_PATTERNS};
pub use technique::Technique;
