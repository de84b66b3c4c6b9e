// crates/hon-i18n-core/src/store.rs
// ============================================================================
// Module: hon-i18n JSON File Store
// Description: Flat-file persistence for catalog and integration documents.
// Purpose: Load and save whole JSON objects with 4-space pretty printing.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Both vendor catalogs and integration translation files are flat JSON
//! documents named `<lang>.json` inside their respective directories. Loads
//! read the whole file; saves rewrite the whole file pretty-printed with
//! 4-space indentation. There is no atomic rename or partial-write
//! protection: the files are regenerable, so a corrupted write is repaired by
//! the next run.
//!
//! ## Invariants
//! - Document roots are JSON objects; anything else is a parse failure.
//! - Key order survives a load/save round trip, so rewrites only append.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::language::Language;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A JSON object document with insertion-ordered keys.
pub type JsonMap = serde_json::Map<String, Value>;

/// Indentation unit used when pretty-printing documents.
const INDENT: &[u8] = b"    ";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure while loading or saving a JSON document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the file from disk failed.
    #[error("failed to read {path}: {detail}")]
    Read {
        /// Path of the unreadable file.
        path: String,
        /// Underlying I/O error description.
        detail: String,
    },
    /// The file contents are not a JSON object document.
    #[error("failed to parse {path}: {detail}")]
    Parse {
        /// Path of the malformed file.
        path: String,
        /// Parser error description.
        detail: String,
    },
    /// Writing the file to disk failed.
    #[error("failed to write {path}: {detail}")]
    Write {
        /// Path of the unwritable file.
        path: String,
        /// Underlying I/O or serialization error description.
        detail: String,
    },
}

// ============================================================================
// SECTION: Path Helpers
// ============================================================================

/// Returns the vendor catalog cache file for a language.
#[must_use]
pub fn catalog_path(dir: &Path, language: Language) -> PathBuf {
    dir.join(format!("{}.json", language.as_str()))
}

/// Returns the integration translation file for a language.
#[must_use]
pub fn integration_path(dir: &Path, language: Language) -> PathBuf {
    dir.join(format!("{}.json", language.as_str()))
}

// ============================================================================
// SECTION: Load
// ============================================================================

/// Loads a whole JSON object document, or an empty one when no path is given.
///
/// # Errors
///
/// Returns [`StoreError`] when the file cannot be read or its root is not a
/// JSON object.
pub fn load_json(path: Option<&Path>) -> Result<JsonMap, StoreError> {
    let Some(path) = path else {
        return Ok(JsonMap::new());
    };
    let bytes = fs::read(path).map_err(|err| StoreError::Read {
        path: path.display().to_string(),
        detail: err.to_string(),
    })?;
    let document: Value = serde_json::from_slice(&bytes).map_err(|err| StoreError::Parse {
        path: path.display().to_string(),
        detail: err.to_string(),
    })?;
    match document {
        Value::Object(entries) => Ok(entries),
        _ => Err(StoreError::Parse {
            path: path.display().to_string(),
            detail: "document root must be a JSON object".to_string(),
        }),
    }
}

/// Loads a JSON object document, treating an absent file as empty.
///
/// # Errors
///
/// Returns [`StoreError`] for any failure other than the file not existing.
pub fn load_json_if_present(path: &Path) -> Result<JsonMap, StoreError> {
    if path.is_file() { load_json(Some(path)) } else { Ok(JsonMap::new()) }
}

// ============================================================================
// SECTION: Save
// ============================================================================

/// Saves a whole JSON object document, pretty-printed with 4-space indents.
///
/// The target file is fully overwritten in place.
///
/// # Errors
///
/// Returns [`StoreError::Write`] when serialization or the write fails.
pub fn save_json(path: &Path, entries: &JsonMap) -> Result<(), StoreError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    entries.serialize(&mut serializer).map_err(|err| StoreError::Write {
        path: path.display().to_string(),
        detail: err.to_string(),
    })?;
    fs::write(path, buffer).map_err(|err| StoreError::Write {
        path: path.display().to_string(),
        detail: err.to_string(),
    })
}
