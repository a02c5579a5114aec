//! Monospace chord chart renderer
//!
//! One line per string in display order, high E labelled lowercase "e"
//! to distinguish it from the low E, muted strings marked "X".

use crate::models::chords::ChordShape;
use crate::models::string_id::StringId;

/// Chart label for a string; the high E string is lowercase by convention
fn chart_label(string: StringId) -> &'static str {
    match string {
        StringId::First => "e",
        other => other.name(),
    }
}

/// Render a chord shape as a small text chart, name first
pub fn chord_chart(chord: &ChordShape) -> String {
    let mut chart = String::new();
    chart.push_str(chord.name);
    chart.push('\n');

    for string in StringId::ALL {
        let marker = match chord.fret(string) {
            Some(fret) => fret.to_string(),
            None => "X".to_string(),
        };
        chart.push_str(&format!("{}|{:^3}|\n", chart_label(string), marker));
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chords::chord_by_key;

    #[test]
    fn test_c_major_chart() {
        let chart = chord_chart(chord_by_key("C").unwrap());
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(
            lines,
            vec![
                "C Major",
                "e| 0 |",
                "B| 1 |",
                "G| 0 |",
                "D| 2 |",
                "A| 3 |",
                "E| X |",
            ]
        );
    }

    #[test]
    fn test_muted_strings_marked() {
        let chart = chord_chart(chord_by_key("D").unwrap());
        assert!(chart.contains("A| X |"));
        assert!(chart.contains("E| X |"));
    }

    #[test]
    fn test_every_chart_has_seven_lines() {
        for chord in &crate::models::chords::CHORDS {
            assert_eq!(chord_chart(chord).lines().count(), 7);
        }
    }
}
