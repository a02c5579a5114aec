//! Typed-cell symbol parser
//!
//! Validates grid-cell input against an explicit allow-list (max three
//! characters; ASCII digits, ASCII letters, and a fixed set of notation
//! symbols) and classifies accepted values into fret numbers, technique
//! marks, fret+technique pairs, muted marks, or empty cells.

use crate::error::TabError;
use crate::models::core::Fret;
use crate::models::technique::Technique;
use crate::models::tuning::MAX_FRET;

/// Maximum accepted input length, in characters
pub const MAX_INPUT_LEN: usize = 3;

/// Non-alphanumeric characters the validator accepts
const ALLOWED_SYMBOLS: [char; 5] = ['/', '\\', '~', '-', '.'];

/// Classified value of one typed cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSymbol {
    /// Empty input (cell cleared)
    Empty,
    /// A bare fret number, e.g. "7" or "12"
    Fret(Fret),
    /// A fret number with a trailing technique mark, e.g. "7h"
    FrettedTechnique { fret: Fret, technique: Technique },
    /// A standalone technique mark, e.g. "~"
    Technique(Technique),
    /// A muted-string mark ("x" or "X")
    Muted,
}

/// Parser/validator for typed cell values
#[derive(Debug, Default)]
pub struct SymbolParser;

impl SymbolParser {
    pub fn new() -> SymbolParser {
        SymbolParser
    }

    /// Check input against the allow-list without classifying it
    ///
    /// Accepts at most [`MAX_INPUT_LEN`] characters, each an ASCII digit,
    /// an ASCII letter, or one of the fixed notation symbols.
    pub fn validate(&self, input: &str) -> Result<(), TabError> {
        if input.chars().count() > MAX_INPUT_LEN {
            return Err(TabError::InvalidInput {
                input: input.to_string(),
                reason: format!("longer than {} characters", MAX_INPUT_LEN),
            });
        }

        for c in input.chars() {
            if !c.is_ascii_alphanumeric() && !ALLOWED_SYMBOLS.contains(&c) {
                return Err(TabError::InvalidInput {
                    input: input.to_string(),
                    reason: format!("character '{}' not allowed", c),
                });
            }
        }

        Ok(())
    }

    /// Validate and classify one typed cell value
    pub fn parse(&self, input: &str) -> Result<CellSymbol, TabError> {
        self.validate(input)?;

        if input.is_empty() {
            return Ok(CellSymbol::Empty);
        }

        if input == "x" || input == "X" {
            return Ok(CellSymbol::Muted);
        }

        // Standalone technique mark
        if let Ok(technique) = input.parse::<Technique>() {
            return Ok(CellSymbol::Technique(technique));
        }

        // Bare fret number
        if input.chars().all(|c| c.is_ascii_digit()) {
            return Ok(CellSymbol::Fret(self.parse_fret(input)?));
        }

        // Fret number followed by a technique mark, e.g. "12b"
        let (digits, rest) = input.split_at(
            input
                .char_indices()
                .find(|(_, c)| !c.is_ascii_digit())
                .map(|(i, _)| i)
                .unwrap_or(input.len()),
        );
        if !digits.is_empty() {
            if let Ok(technique) = rest.parse::<Technique>() {
                return Ok(CellSymbol::FrettedTechnique {
                    fret: self.parse_fret(digits)?,
                    technique,
                });
            }
        }

        Err(TabError::InvalidInput {
            input: input.to_string(),
            reason: "not a fret number, technique mark, or muted mark".to_string(),
        })
    }

    fn parse_fret(&self, digits: &str) -> Result<Fret, TabError> {
        let fret: u32 = digits.parse().map_err(|_| TabError::InvalidInput {
            input: digits.to_string(),
            reason: "not a fret number".to_string(),
        })?;
        if fret > MAX_FRET as u32 {
            return Err(TabError::InvalidInput {
                input: digits.to_string(),
                reason: format!("fret beyond {}", MAX_FRET),
            });
        }
        Ok(fret as Fret)
    }

    /// Validate a batch of cell values, collecting problems per cell
    pub fn validate_cells(&self, cells: &[&str]) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for (index, cell) in cells.iter().enumerate() {
            match self.parse(cell) {
                Ok(CellSymbol::Technique(_)) => {
                    warnings.push(format!(
                        "standalone technique at cell {}: '{}' has no fret",
                        index, cell
                    ));
                }
                Ok(_) => {}
                Err(e) => errors.push(format!("cell {}: {}", index, e)),
            }
        }

        ValidationResult {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Result of batch cell validation
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell() {
        let parser = SymbolParser::new();
        assert_eq!(parser.parse("").unwrap(), CellSymbol::Empty);
    }

    #[test]
    fn test_bare_frets() {
        let parser = SymbolParser::new();
        assert_eq!(parser.parse("0").unwrap(), CellSymbol::Fret(0));
        assert_eq!(parser.parse("7").unwrap(), CellSymbol::Fret(7));
        assert_eq!(parser.parse("12").unwrap(), CellSymbol::Fret(12));
        assert_eq!(parser.parse("24").unwrap(), CellSymbol::Fret(24));
    }

    #[test]
    fn test_fret_beyond_table_rejected() {
        let parser = SymbolParser::new();
        assert!(parser.parse("25").is_err());
        assert!(parser.parse("99").is_err());
    }

    #[test]
    fn test_techniques() {
        let parser = SymbolParser::new();
        assert_eq!(
            parser.parse("h").unwrap(),
            CellSymbol::Technique(Technique::HammerOn)
        );
        assert_eq!(
            parser.parse("~").unwrap(),
            CellSymbol::Technique(Technique::Vibrato)
        );
    }

    #[test]
    fn test_fret_with_technique() {
        let parser = SymbolParser::new();
        assert_eq!(
            parser.parse("7h").unwrap(),
            CellSymbol::FrettedTechnique {
                fret: 7,
                technique: Technique::HammerOn
            }
        );
        assert_eq!(
            parser.parse("12b").unwrap(),
            CellSymbol::FrettedTechnique {
                fret: 12,
                technique: Technique::Bend
            }
        );
        assert_eq!(
            parser.parse("5/").unwrap(),
            CellSymbol::FrettedTechnique {
                fret: 5,
                technique: Technique::SlideUp
            }
        );
    }

    #[test]
    fn test_muted() {
        let parser = SymbolParser::new();
        assert_eq!(parser.parse("x").unwrap(), CellSymbol::Muted);
        assert_eq!(parser.parse("X").unwrap(), CellSymbol::Muted);
    }

    #[test]
    fn test_length_limit() {
        let parser = SymbolParser::new();
        assert!(parser.validate("12b").is_ok());
        assert!(parser.validate("12bb").is_err());
    }

    #[test]
    fn test_disallowed_characters() {
        let parser = SymbolParser::new();
        assert!(parser.validate("7!").is_err());
        assert!(parser.validate("a@").is_err());
        assert!(parser.validate("é").is_err());
        // Letters pass the allow-list even when classification later fails
        assert!(parser.validate("qq").is_ok());
        assert!(parser.parse("qq").is_err());
    }

    #[test]
    fn test_validate_cells_collects_errors_and_warnings() {
        let parser = SymbolParser::new();
        let result = parser.validate_cells(&["7", "", "h", "banana"]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);

        let clean = parser.validate_cells(&["7", "12b", "x", ""]);
        assert!(clean.valid);
        assert!(clean.errors.is_empty());
    }
}
