//! Standard-tuning pitch lookup
//!
//! Maps (string, fret) to a note label like "E4" or "F#4/Gb4". Labels
//! ascend chromatically from each open string; accidentals carry both
//! enharmonic spellings with the octave digit on each.

use crate::error::TabError;
use crate::models::core::Fret;
use crate::models::string_id::StringId;

/// Highest fret answered by the lookup table
pub const MAX_FRET: Fret = 24;

/// Chromatic cycle starting at C; accidentals as enharmonic pairs
const CHROMATIC: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

/// Open-string pitch as (chromatic index, octave) under standard tuning
fn open_pitch(string: StringId) -> (usize, u32) {
    match string {
        StringId::First => (4, 4),  // E4
        StringId::Second => (11, 3), // B3
        StringId::Third => (7, 3),  // G3
        StringId::Fourth => (2, 3), // D3
        StringId::Fifth => (9, 2),  // A2
        StringId::Sixth => (4, 2),  // E2
    }
}

/// Note label for a fretted position, e.g. "G2" or "C#5/Db5"
///
/// Fret 0 is the open string. Frets beyond [`MAX_FRET`] are a caller
/// error; the fretboard never offers them.
pub fn note_label(string: StringId, fret: Fret) -> Result<String, TabError> {
    if fret > MAX_FRET {
        return Err(TabError::FretOutOfRange {
            string: string.number().to_string(),
            fret,
            max: MAX_FRET,
        });
    }

    let (open_index, open_octave) = open_pitch(string);
    let total = open_index + fret as usize;
    let name = CHROMATIC[total % 12];
    let octave = open_octave + (total / 12) as u32;

    // Attach the octave digit to both halves of an enharmonic pair
    Ok(match name.split_once('/') {
        Some((sharp, flat)) => format!("{}{}/{}{}", sharp, octave, flat, octave),
        None => format!("{}{}", name, octave),
    })
}

/// Simplified display name: text before the first "/", octave digits stripped
///
/// Malformed labels (no digits, no "/") pass through unchanged.
pub fn simple_note_name(label: &str) -> String {
    label
        .split('/')
        .next()
        .unwrap_or(label)
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect()
}
