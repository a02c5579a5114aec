//! Saved-tab persistence
//!
//! Named snapshots of the fret selection, kept as a JSON list under the
//! `savedTabs` local-storage key. The library itself is plain data so
//! save/load/delete logic is testable off the browser; only the thin
//! glue at the bottom touches `window.localStorage`.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::i18n::{Language, LANGUAGE_STORAGE_KEY};
use crate::models::core::FretSelection;

/// Local-storage key holding the saved-tab list
pub const SAVED_TABS_STORAGE_KEY: &str = "savedTabs";

/// One saved tab snapshot
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SavedTab {
    /// Opaque identifier used for lookup and deletion
    pub id: String,

    /// User-chosen name
    pub name: String,

    /// The selection at save time
    pub selection: FretSelection,

    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl SavedTab {
    /// Create a snapshot with a fresh id and timestamp
    pub fn new(name: impl Into<String>, selection: FretSelection) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            selection,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The ordered collection of saved tabs
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct TabLibrary {
    tabs: Vec<SavedTab>,
}

impl TabLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a library from its stored JSON form
    pub fn from_json(json: &str) -> Result<Self, TabError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the library for storage
    pub fn to_json(&self) -> Result<String, TabError> {
        Ok(serde_json::to_string(&self.tabs)?)
    }

    /// Save a snapshot, validating name and selection first
    ///
    /// Rejects a blank name and an empty selection, matching the save
    /// guards on the editing surface.
    pub fn save(
        &mut self,
        name: &str,
        selection: &FretSelection,
    ) -> Result<&SavedTab, TabError> {
        if name.trim().is_empty() {
            return Err(TabError::SaveRejected("enter a tab name".to_string()));
        }
        if selection.is_empty() {
            return Err(TabError::SaveRejected(
                "add some notes before saving".to_string(),
            ));
        }

        self.tabs.push(SavedTab::new(name, selection.clone()));
        Ok(self.tabs.last().expect("just pushed"))
    }

    /// Look up a saved tab by id
    pub fn get(&self, id: &str) -> Option<&SavedTab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Delete a saved tab by id, returning it
    pub fn delete(&mut self, id: &str) -> Result<SavedTab, TabError> {
        let index = self
            .tabs
            .iter()
            .position(|tab| tab.id == id)
            .ok_or_else(|| TabError::TabNotFound(id.to_string()))?;
        Ok(self.tabs.remove(index))
    }

    /// All saved tabs in save order
    pub fn tabs(&self) -> &[SavedTab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

// ============================================================================
// Browser local-storage glue
// ============================================================================

/// Handle to `window.localStorage`
fn local_storage() -> Result<web_sys::Storage, TabError> {
    web_sys::window()
        .ok_or(TabError::StorageUnavailable)?
        .local_storage()
        .map_err(|_| TabError::StorageUnavailable)?
        .ok_or(TabError::StorageUnavailable)
}

/// Load the saved-tab library; an absent key yields an empty library
pub fn load_library() -> Result<TabLibrary, TabError> {
    let storage = local_storage()?;
    match storage
        .get_item(SAVED_TABS_STORAGE_KEY)
        .map_err(|_| TabError::StorageUnavailable)?
    {
        Some(json) => TabLibrary::from_json(&json),
        None => Ok(TabLibrary::new()),
    }
}

/// Persist the saved-tab library
pub fn persist_library(library: &TabLibrary) -> Result<(), TabError> {
    let storage = local_storage()?;
    storage
        .set_item(SAVED_TABS_STORAGE_KEY, &library.to_json()?)
        .map_err(|_| TabError::StorageUnavailable)
}

/// Load the persisted language choice, if any valid one is stored
pub fn load_language() -> Result<Option<Language>, TabError> {
    let storage = local_storage()?;
    let stored = storage
        .get_item(LANGUAGE_STORAGE_KEY)
        .map_err(|_| TabError::StorageUnavailable)?;
    Ok(stored.and_then(|value| value.parse().ok()))
}

/// Persist the language choice
pub fn persist_language(language: Language) -> Result<(), TabError> {
    let storage = local_storage()?;
    storage
        .set_item(LANGUAGE_STORAGE_KEY, language.as_str())
        .map_err(|_| TabError::StorageUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::Note;
    use crate::models::string_id::StringId;

    fn sample_selection() -> FretSelection {
        let mut selection = FretSelection::new();
        selection.set(StringId::First, 0, Note::new("E4"));
        selection.set(StringId::Sixth, 3, Note::new("G2"));
        selection
    }

    #[test]
    fn test_save_assigns_unique_ids() {
        let mut library = TabLibrary::new();
        let selection = sample_selection();

        let first = library.save("Riff A", &selection).unwrap().id.clone();
        let second = library.save("Riff B", &selection).unwrap().id.clone();

        assert_ne!(first, second);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_save_rejects_blank_name() {
        let mut library = TabLibrary::new();
        assert!(library.save("", &sample_selection()).is_err());
        assert!(library.save("   ", &sample_selection()).is_err());
        assert!(library.is_empty());
    }

    #[test]
    fn test_save_rejects_empty_selection() {
        let mut library = TabLibrary::new();
        assert!(library.save("Riff", &FretSelection::new()).is_err());
        assert!(library.is_empty());
    }

    #[test]
    fn test_get_and_delete() {
        let mut library = TabLibrary::new();
        let id = library
            .save("Riff", &sample_selection())
            .unwrap()
            .id
            .clone();

        assert_eq!(library.get(&id).unwrap().name, "Riff");

        let deleted = library.delete(&id).unwrap();
        assert_eq!(deleted.name, "Riff");
        assert!(library.get(&id).is_none());
        assert!(library.delete(&id).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut library = TabLibrary::new();
        library.save("Riff", &sample_selection()).unwrap();

        let json = library.to_json().unwrap();
        let restored = TabLibrary::from_json(&json).unwrap();
        assert_eq!(restored, library);
    }

    #[test]
    fn test_loaded_selection_matches_saved() {
        let mut library = TabLibrary::new();
        let selection = sample_selection();
        let id = library.save("Riff", &selection).unwrap().id.clone();

        let json = library.to_json().unwrap();
        let restored = TabLibrary::from_json(&json).unwrap();
        assert_eq!(restored.get(&id).unwrap().selection, selection);
    }
}
