//! Error types for the tablature editor core
//!
//! Rendering is total over well-formed selections and never returns an
//! error; the variants here cover editing operations, typed-cell input,
//! and persistence.

use thiserror::Error;

/// Top-level error type for editor operations
#[derive(Debug, Error)]
pub enum TabError {
    /// Typed cell input rejected by the allow-list validator
    #[error("invalid cell input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Fret position beyond the 24-fret tuning table
    #[error("fret {fret} out of range on string {string} (max {max})")]
    FretOutOfRange { string: String, fret: u8, max: u8 },

    /// Unknown string identifier (valid: "1" through "6")
    #[error("unknown string id '{0}'")]
    UnknownString(String),

    /// Chord key not present in the chord library
    #[error("unknown chord '{0}'")]
    UnknownChord(String),

    /// Saved tab id not present in the library
    #[error("no saved tab with id '{0}'")]
    TabNotFound(String),

    /// Save rejected (empty name or empty selection)
    #[error("cannot save tab: {0}")]
    SaveRejected(String),

    /// Browser local storage not reachable
    #[error("local storage unavailable")]
    StorageUnavailable,

    /// Snapshot (de)serialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Undo/redo requested with no history available
    #[error("{0}")]
    History(String),
}
