//! Tablature Editor WASM API
//!
//! This module provides the JavaScript-facing API for the tablature
//! editor. It includes shared utilities for serialization, validation,
//! error handling, and logging, plus the API functions organized by
//! functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: logging macros, (de)serialization helpers, the editor
//!   lock, and argument validators
//! - `core`: editing operations over the module-owned editor state
//! - `export`: text export, saved-tab persistence, and reference data

pub mod helpers;
pub mod core;
pub mod export;

// Re-export all public functions to keep a flat JS-facing surface
pub use self::core::*;
pub use export::*;
