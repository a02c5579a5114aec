//! ASCII tab renderer
//!
//! Converts a sparse fret selection into an aligned monospace tab
//! block, one line per string in display order. Pure function of
//! (document, options); rendering never fails.
//!
//! Layout rules:
//! - horizontal spacing is two dash characters per fret of distance,
//!   so multi-character markers rarely collide with their neighbors;
//!   when they still do (e.g. "12" or a note name), the overlap is
//!   accepted rather than corrected
//! - an empty string renders a filler run of `max_fret * 2 + 10`
//!   dashes so it stays visually aligned with populated strings
//! - every populated string gets a trailing margin ending at
//!   `(max_fret + 5) * 2` columns past its last marker's fret

use crate::models::core::{RenderOptions, TabDocument};
use crate::models::string_id::StringId;
use crate::models::tuning::simple_note_name;

/// Render a document into an ASCII tab block
///
/// A non-empty title becomes the first line, followed by a blank line.
/// Each string line is `<label>|<markers and dashes>|` terminated by a
/// newline. Same inputs always produce the same string.
pub fn render_tab(document: &TabDocument, options: &RenderOptions) -> String {
    let mut tab = String::new();

    if let Some(title) = document.display_title() {
        tab.push_str(title);
        tab.push_str("\n\n");
    }

    let max_fret = document.selection.max_fret() as usize;

    for string in StringId::ALL {
        let label = if options.use_string_numbers {
            string.number()
        } else {
            string.name()
        };
        tab.push_str(label);
        tab.push('|');

        let frets = document.selection.frets_on(string);
        if frets.is_empty() {
            // Fixed-width filler keeps empty strings aligned
            tab.push_str(&"-".repeat(max_fret * 2 + 10));
        } else {
            let mut cursor = 0usize;
            for (fret, note) in frets {
                let fret = fret as usize;
                tab.push_str(&"-".repeat((fret - cursor) * 2));

                if options.show_note_names {
                    tab.push_str(&simple_note_name(&note.label));
                } else {
                    tab.push_str(&fret.to_string());
                }
                if let Some(technique) = note.technique {
                    tab.push(technique.symbol());
                }

                cursor = fret + 1;
            }
            // Right margin so all populated lines end at a consistent column
            tab.push_str(&"-".repeat((max_fret + 5).saturating_sub(cursor) * 2));
        }

        tab.push_str("|\n");
    }

    tab
}
