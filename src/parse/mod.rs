//! Parsing module for typed tab-cell input
//!
//! The editing surface lets users type directly into grid cells; this
//! module validates and classifies those values before they reach the
//! selection model.

pub mod symbol;

pub use symbol::{CellSymbol, SymbolParser, ValidationResult};
