/// Identifier for one of the six guitar strings
///
/// Strings are numbered 1 (high E) through 6 (low E), matching the
/// convention used on the editing surface. Declaration order is display
/// order, so iterating `StringId::ALL` yields tab lines top to bottom.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TabError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StringId {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
    #[serde(rename = "5")]
    Fifth,
    #[serde(rename = "6")]
    Sixth,
}

impl StringId {
    /// All six strings in display order (high E first)
    pub const ALL: [StringId; 6] = [
        StringId::First,
        StringId::Second,
        StringId::Third,
        StringId::Fourth,
        StringId::Fifth,
        StringId::Sixth,
    ];

    /// Numeric label, "1" through "6"
    pub fn number(&self) -> &'static str {
        match self {
            StringId::First => "1",
            StringId::Second => "2",
            StringId::Third => "3",
            StringId::Fourth => "4",
            StringId::Fifth => "5",
            StringId::Sixth => "6",
        }
    }

    /// String-letter label under standard tuning (high to low: E B G D A E)
    pub fn name(&self) -> &'static str {
        match self {
            StringId::First => "E",
            StringId::Second => "B",
            StringId::Third => "G",
            StringId::Fourth => "D",
            StringId::Fifth => "A",
            StringId::Sixth => "E",
        }
    }

    /// 0-based index in display order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for StringId {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(StringId::First),
            "2" => Ok(StringId::Second),
            "3" => Ok(StringId::Third),
            "4" => Ok(StringId::Fourth),
            "5" => Ok(StringId::Fifth),
            "6" => Ok(StringId::Sixth),
            _ => Err(TabError::UnknownString(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!("1".parse::<StringId>().unwrap(), StringId::First);
        assert_eq!("4".parse::<StringId>().unwrap(), StringId::Fourth);
        assert_eq!("6".parse::<StringId>().unwrap(), StringId::Sixth);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("0".parse::<StringId>().is_err());
        assert!("7".parse::<StringId>().is_err());
        assert!("E".parse::<StringId>().is_err());
        assert!("".parse::<StringId>().is_err());
    }

    #[test]
    fn test_names_high_to_low() {
        let names: Vec<&str> = StringId::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["E", "B", "G", "D", "A", "E"]);
    }

    #[test]
    fn test_display_order() {
        let numbers: Vec<&str> = StringId::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec!["1", "2", "3", "4", "5", "6"]);
        assert!(StringId::First < StringId::Sixth);
    }

    #[test]
    fn test_serde_uses_numeric_labels() {
        let json = serde_json::to_string(&StringId::Third).unwrap();
        assert_eq!(json, "\"3\"");
        let parsed: StringId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, StringId::Third);
    }
}
