//! Chord reference library
//!
//! Ten open-position shapes for quick insertion. Frets are indexed in
//! string display order (high E first); `None` marks a muted string.

use serde::Serialize;

use crate::models::core::Fret;
use crate::models::string_id::StringId;

/// One chord shape from the reference library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordShape {
    /// Short key used to select the chord, e.g. "Am"
    pub key: &'static str,

    /// Full display name, e.g. "A Minor"
    pub name: &'static str,

    /// Fret per string in display order; `None` = muted
    pub frets: [Option<Fret>; 6],
}

impl ChordShape {
    /// Fret for one string; `None` = muted
    pub fn fret(&self, string: StringId) -> Option<Fret> {
        self.frets[string.index()]
    }

    /// Strings actually sounded by this shape, with their frets
    pub fn sounded(&self) -> impl Iterator<Item = (StringId, Fret)> + '_ {
        StringId::ALL
            .iter()
            .filter_map(|&string| self.fret(string).map(|fret| (string, fret)))
    }
}

/// The reference chord library, in menu order
pub static CHORDS: [ChordShape; 10] = [
    ChordShape {
        key: "C",
        name: "C Major",
        frets: [Some(0), Some(1), Some(0), Some(2), Some(3), None],
    },
    ChordShape {
        key: "G",
        name: "G Major",
        frets: [Some(3), Some(0), Some(0), Some(0), Some(2), Some(3)],
    },
    ChordShape {
        key: "D",
        name: "D Major",
        frets: [Some(2), Some(3), Some(2), Some(0), None, None],
    },
    ChordShape {
        key: "A",
        name: "A Major",
        frets: [Some(0), Some(2), Some(2), Some(2), Some(0), None],
    },
    ChordShape {
        key: "E",
        name: "E Major",
        frets: [Some(0), Some(0), Some(1), Some(2), Some(2), Some(0)],
    },
    ChordShape {
        key: "Am",
        name: "A Minor",
        frets: [Some(0), Some(1), Some(2), Some(2), Some(0), None],
    },
    ChordShape {
        key: "Em",
        name: "E Minor",
        frets: [Some(0), Some(0), Some(0), Some(2), Some(2), Some(0)],
    },
    ChordShape {
        key: "Dm",
        name: "D Minor",
        frets: [Some(1), Some(3), Some(2), Some(0), None, None],
    },
    ChordShape {
        key: "F",
        name: "F Major",
        frets: [Some(1), Some(1), Some(2), Some(3), Some(3), Some(1)],
    },
    ChordShape {
        key: "B7",
        name: "B7",
        frets: [Some(0), Some(0), Some(2), Some(1), Some(2), None],
    },
];

/// Look up a chord shape by its key
pub fn chord_by_key(key: &str) -> Option<&'static ChordShape> {
    CHORDS.iter().find(|chord| chord.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key() {
        assert_eq!(chord_by_key("Am").unwrap().name, "A Minor");
        assert_eq!(chord_by_key("B7").unwrap().name, "B7");
        assert!(chord_by_key("Fmaj7").is_none());
    }

    #[test]
    fn test_c_major_shape() {
        let c = chord_by_key("C").unwrap();
        assert_eq!(c.fret(StringId::First), Some(0));
        assert_eq!(c.fret(StringId::Second), Some(1));
        assert_eq!(c.fret(StringId::Fifth), Some(3));
        assert_eq!(c.fret(StringId::Sixth), None);
        assert_eq!(c.sounded().count(), 5);
    }

    #[test]
    fn test_open_chords_stay_in_first_position() {
        for chord in &CHORDS {
            for (_, fret) in chord.sounded() {
                assert!(fret <= 3, "{} uses fret {}", chord.key, fret);
            }
        }
    }

    #[test]
    fn test_keys_unique() {
        for (i, a) in CHORDS.iter().enumerate() {
            for b in &CHORDS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
