//! # Error Types
//!
//! This module defines all error types for the voicing engine.
//!
//! The engine itself is pure: realization never fails, and selection only fails
//! when the recipe table has no entry for a chord type. The remaining variants
//! cover string conversions and YAML loading at the crate boundary.
//!
//! ## Error Types
//! - `MissingRecipes` - A chord type has no registered voicing recipes (data-table omission)
//! - `UnknownNote` / `UnknownChordType` / `UnknownStyle` / `UnknownProgression` - Bad names
//! - `CatalogError` - Recipe catalog YAML could not be read
//! - `SettingsError` - Practice settings YAML could not be read or holds invalid values
//! - `ReadError` - A settings or catalog file could not be opened
//!
//! ## Usage
//! ```rust
//! use pianovoice::{VoicingCatalog, VoicingEngine, VoicingError};
//!
//! let catalog = VoicingCatalog::from_yaml("maj7: []").unwrap();
//! match VoicingEngine::new(catalog) {
//!     Ok(_) => println!("Ready"),
//!     Err(VoicingError::MissingRecipes { chord_type }) => {
//!         eprintln!("No recipes for {}", chord_type);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::theory::ChordType;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoicingError {
    /// No voicing recipe is registered for a chord type.
    ///
    /// # Example
    /// ```
    /// # use pianovoice::{ChordType, VoicingError};
    /// let err = VoicingError::MissingRecipes { chord_type: ChordType::Dim7 };
    /// assert_eq!(err.to_string(), "No voicing recipes registered for chord type dim7");
    /// ```
    #[error("No voicing recipes registered for chord type {chord_type}")]
    MissingRecipes { chord_type: ChordType },

    #[error("Unknown note name: {0}")]
    UnknownNote(String),

    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),

    #[error("Unknown voicing style: {0}")]
    UnknownStyle(String),

    #[error("Unknown progression: {0}")]
    UnknownProgression(String),

    /// Recipe catalog YAML is malformed.
    ///
    /// # Example
    /// ```
    /// # use pianovoice::VoicingError;
    /// let err = VoicingError::CatalogError("expected a mapping".to_string());
    /// assert_eq!(err.to_string(), "Invalid recipe catalog: expected a mapping");
    /// ```
    #[error("Invalid recipe catalog: {0}")]
    CatalogError(String),

    #[error("Invalid settings: {0}")]
    SettingsError(String),

    #[error("Error reading file '{path}': {message}")]
    ReadError { path: String, message: String },
}
