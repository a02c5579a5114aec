//! UI string translation
//!
//! English and Spanish tables for every UI string the editor surfaces.
//! Unknown keys echo back unchanged so a missing entry degrades to its
//! key instead of breaking the UI.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Local-storage key holding the persisted language choice
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "es")]
    Es,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            _ => Err(format!("unsupported language: '{}'", s)),
        }
    }
}

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("appTitle", "Sergio's Tab Creator"),
        ("tabEditor", "Tab Editor"),
        ("addRow", "Add Row"),
        ("clearTab", "Clear Tab"),
        ("saveTab", "Save Tab"),
        ("exportTab", "Export Tab"),
        ("copyToClipboard", "Copy to Clipboard"),
        ("exportScreenshot", "Export as Image"),
        ("screenshotExported", "Screenshot exported!"),
        ("screenshotError", "Error exporting screenshot"),
        ("language", "Language"),
        ("english", "English"),
        ("spanish", "Spanish"),
        ("tabName", "Tab Name"),
        ("save", "Save"),
        ("savedTabs", "Saved Tabs"),
        ("load", "Load"),
        ("delete", "Delete"),
        ("noSavedTabs", "No saved tabs"),
        ("copied", "Copied to clipboard!"),
        ("enterTabName", "Enter tab name"),
        ("notationGuide", "Notation Guide"),
        ("hammerOn", "h - Hammer-on"),
        ("pullOff", "p - Pull-off"),
        ("bend", "b - Bend"),
        ("slideUp", "/ - Slide up"),
        ("slideDown", "\\ - Slide down"),
        ("vibrato", "~ - Vibrato"),
        ("selectChord", "Select Chord"),
        ("applyChord", "Apply Chord"),
        ("downStrum", "Down strum"),
        ("upStrum", "Up strum"),
        ("rest", "Rest"),
    ])
});

static ES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("appTitle", "Creador de Tablaturas"),
        ("tabEditor", "Editor de Tablatura"),
        ("addRow", "Añadir Fila"),
        ("clearTab", "Limpiar Tablatura"),
        ("saveTab", "Guardar Tablatura"),
        ("exportTab", "Exportar Tablatura"),
        ("copyToClipboard", "Copiar al Portapapeles"),
        ("exportScreenshot", "Exportar como Imagen"),
        ("screenshotExported", "¡Captura exportada!"),
        ("screenshotError", "Error al exportar captura"),
        ("language", "Idioma"),
        ("english", "Inglés"),
        ("spanish", "Español"),
        ("tabName", "Nombre de Tablatura"),
        ("save", "Guardar"),
        ("savedTabs", "Tablaturas Guardadas"),
        ("load", "Cargar"),
        ("delete", "Eliminar"),
        ("noSavedTabs", "No hay tablaturas guardadas"),
        ("copied", "¡Copiado al portapapeles!"),
        ("enterTabName", "Ingrese nombre de tablatura"),
        ("notationGuide", "Guía de Notación"),
        ("hammerOn", "h - Ligado ascendente"),
        ("pullOff", "p - Ligado descendente"),
        ("bend", "b - Bend"),
        ("slideUp", "/ - Deslizamiento ascendente"),
        ("slideDown", "\\ - Deslizamiento descendente"),
        ("vibrato", "~ - Vibrato"),
        ("selectChord", "Seleccionar Acorde"),
        ("applyChord", "Aplicar Acorde"),
        ("downStrum", "Rasgueo hacia abajo"),
        ("upStrum", "Rasgueo hacia arriba"),
        ("rest", "Silencio"),
    ])
});

fn table(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}

/// Translate a UI string key; unknown keys echo back unchanged
pub fn translate(language: Language, key: &str) -> &str {
    match table(language).get(key) {
        Some(value) => value,
        None => key,
    }
}
