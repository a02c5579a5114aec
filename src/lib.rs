//! Guitar Tablature Editor WASM Module
//!
//! This is the main WASM module for the guitar tablature editor.
//! It owns the editing core: fret selections, ASCII tab rendering,
//! undo/redo, typed-cell validation, chord and strumming reference
//! data, saved-tab persistence, and UI string translation.

pub mod error;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod undo;
pub mod storage;
pub mod i18n;
pub mod api;

// Re-export commonly used types
pub use error::TabError;
pub use models::core::*;
pub use models::string_id::StringId;
pub use models::technique::Technique;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Tab editor WASM module initialized");
}
