//! Strumming-pattern reference library
//!
//! Eight common patterns built from down strums, up strums, and rests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One stroke in a strumming pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strum {
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "R")]
    Rest,
}

impl Strum {
    /// Single-letter symbol used in pattern shorthand
    pub fn symbol(&self) -> char {
        match self {
            Strum::Down => 'D',
            Strum::Up => 'U',
            Strum::Rest => 'R',
        }
    }

    /// Translation key for the localized stroke name
    pub fn name_key(&self) -> &'static str {
        match self {
            Strum::Down => "downStrum",
            Strum::Up => "upStrum",
            Strum::Rest => "rest",
        }
    }
}

impl fmt::Display for Strum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A named strumming pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrumPattern {
    /// Stable identifier, e.g. "waltz"
    pub id: &'static str,

    /// Display name including the shorthand, e.g. "Waltz (D D U)"
    pub name: &'static str,

    /// The strokes in order
    pub strums: &'static [Strum],
}

impl StrumPattern {
    /// One-line shorthand, e.g. "D D U"
    pub fn shorthand(&self) -> String {
        self.strums
            .iter()
            .map(|s| s.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

use Strum::{Down, Rest, Up};

/// The reference pattern library, in menu order
pub static STRUMMING_PATTERNS: [StrumPattern; 8] = [
    StrumPattern {
        id: "basic",
        name: "Basic (D D D D)",
        strums: &[Down, Down, Down, Down],
    },
    StrumPattern {
        id: "waltz",
        name: "Waltz (D D U)",
        strums: &[Down, Down, Up],
    },
    StrumPattern {
        id: "country",
        name: "Country (D DU DU)",
        strums: &[Down, Down, Up, Down, Up],
    },
    StrumPattern {
        id: "rock",
        name: "Rock (D DU UDU)",
        strums: &[Down, Down, Up, Up, Down, Up],
    },
    StrumPattern {
        id: "ballad",
        name: "Ballad (D D DU UDU)",
        strums: &[Down, Down, Down, Up, Up, Down, Up],
    },
    StrumPattern {
        id: "reggae",
        name: "Reggae (D R U R)",
        strums: &[Down, Rest, Up, Rest],
    },
    StrumPattern {
        id: "folk",
        name: "Folk (D DU UD DU)",
        strums: &[Down, Down, Up, Up, Down, Down, Up],
    },
    StrumPattern {
        id: "blues",
        name: "Blues (D U D U D U)",
        strums: &[Down, Up, Down, Up, Down, Up],
    },
];

/// Look up a pattern by its id
pub fn pattern_by_id(id: &str) -> Option<&'static StrumPattern> {
    STRUMMING_PATTERNS.iter().find(|pattern| pattern.id == id)
}
