/// Playing-technique annotations attached to a fretted note
///
/// These are the six symbols from the notation guide: hammer-on,
/// pull-off, bend, slide up, slide down, vibrato. The symbol is the
/// serialized form, so selections round-trip through JSON unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technique {
    #[serde(rename = "h")]
    HammerOn,
    #[serde(rename = "p")]
    PullOff,
    #[serde(rename = "b")]
    Bend,
    #[serde(rename = "/")]
    SlideUp,
    #[serde(rename = "\\")]
    SlideDown,
    #[serde(rename = "~")]
    Vibrato,
}

impl Technique {
    /// The single-character tab symbol
    pub fn symbol(&self) -> char {
        match self {
            Technique::HammerOn => 'h',
            Technique::PullOff => 'p',
            Technique::Bend => 'b',
            Technique::SlideUp => '/',
            Technique::SlideDown => '\\',
            Technique::Vibrato => '~',
        }
    }

    /// Parse a single tab symbol
    pub fn from_symbol(c: char) -> Option<Technique> {
        match c {
            'h' => Some(Technique::HammerOn),
            'p' => Some(Technique::PullOff),
            'b' => Some(Technique::Bend),
            '/' => Some(Technique::SlideUp),
            '\\' => Some(Technique::SlideDown),
            '~' => Some(Technique::Vibrato),
            _ => None,
        }
    }

    /// Translation key for the localized technique name
    pub fn name_key(&self) -> &'static str {
        match self {
            Technique::HammerOn => "hammerOn",
            Technique::PullOff => "pullOff",
            Technique::Bend => "bend",
            Technique::SlideUp => "slideUp",
            Technique::SlideDown => "slideDown",
            Technique::Vibrato => "vibrato",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Technique {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Technique::from_symbol(c)
                .ok_or_else(|| format!("unknown technique symbol '{}'", s)),
            _ => Err(format!("unknown technique symbol '{}'", s)),
        }
    }
}
