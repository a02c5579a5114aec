//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for serialization,
//! deserialization, error handling, and validation across all API
//! operations, plus the module-owned editor state itself.

use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

use crate::models::core::Fret;
use crate::models::editor_state::EditorState;
use crate::models::string_id::StringId;
use crate::models::tuning::MAX_FRET;

// WASM-owned editor storage (canonical source of truth)
lazy_static! {
    static ref EDITOR: Mutex<EditorState> = Mutex::new(EditorState::new());
}

/// Lock the module-owned editor state
pub fn lock_editor() -> Result<MutexGuard<'static, EditorState>, JsValue> {
    EDITOR
        .lock()
        .map_err(|_| JsValue::from_str("editor state lock poisoned"))
}

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Parse a string id argument ("1" through "6")
pub fn parse_string_id(value: &str) -> Result<StringId, JsValue> {
    StringId::from_str(value).map_err(|e| api_error(e))
}

/// Validate a fret argument against the tuning table
pub fn validate_fret(fret: Fret) -> Result<(), JsValue> {
    if fret > MAX_FRET {
        return Err(JsValue::from_str(&format!(
            "fret {} out of range (max {})",
            fret, MAX_FRET
        )));
    }
    Ok(())
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a core error into a logged JsValue
pub fn api_error(error: impl std::fmt::Display) -> JsValue {
    let msg = error.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}
