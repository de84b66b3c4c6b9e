// crates/hon-i18n-core/src/merge.rs
// ============================================================================
// Module: hon-i18n Merge Driver
// Description: Merges resolved sensor state labels into integration documents.
// Purpose: Stamp vendor labels under entity.sensor.<name>.state.<code> leaves.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The merge driver walks every sensor phase table, resolves each catalog key
//! against the target language (with the English catalog as fallback), and
//! writes the labels into the integration translation document. The merge is
//! additive: it creates intermediate objects on demand, overwrites only the
//! exact state leaves it resolves, and leaves every other key untouched.
//!
//! ## Invariants
//! - Codes whose key resolves to nothing are skipped entirely; no value is
//!   written and no scaffold objects are created on their behalf.
//! - Re-running the merge with unchanged catalogs reproduces the identical
//!   document.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::catalog::resolve_label;
use crate::sensor::SENSOR_TABLES;
use crate::store::JsonMap;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure while merging labels into an integration document.
#[derive(Debug, Error)]
pub enum MergeError {
    /// An intermediate path position exists but is not a JSON object.
    #[error("cannot merge into {path}: existing value is not an object")]
    Shape {
        /// Dotted path of the offending position.
        path: String,
    },
}

// ============================================================================
// SECTION: Merge Statistics
// ============================================================================

/// Counters describing one merge pass over a single language.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Number of state labels written into the document.
    pub written: usize,
    /// Number of codes whose key resolved to no label in either catalog.
    pub missing: usize,
}

// ============================================================================
// SECTION: Merge Driver
// ============================================================================

/// Merges every sensor phase table into the integration document.
///
/// Each table entry's catalog key is resolved against `primary` with a single
/// retry against `fallback`; only non-empty labels are written, at
/// `entity.sensor.<sensor>.state.<code>` with the code rendered as a decimal
/// string. Existing values at those exact leaves are overwritten; everything
/// else in `target` is preserved.
///
/// # Errors
///
/// Returns [`MergeError::Shape`] when a position along a write path already
/// holds a non-object value.
pub fn apply_sensor_states(
    target: &mut JsonMap,
    primary: &Catalog,
    fallback: Option<&Catalog>,
) -> Result<MergeStats, MergeError> {
    let mut stats = MergeStats::default();
    for (sensor, table) in SENSOR_TABLES {
        let mut labels: Vec<(u8, String)> = Vec::with_capacity(table.len());
        for (code, key) in table.iter() {
            let label = resolve_label(key, primary, fallback);
            if label.is_empty() {
                stats.missing += 1;
            } else {
                labels.push((*code, label));
            }
        }
        if labels.is_empty() {
            continue;
        }
        let states = state_slot(target, sensor)?;
        for (code, label) in labels {
            states.insert(code.to_string(), Value::String(label));
            stats.written += 1;
        }
    }
    Ok(stats)
}

/// Returns the mutable `entity.sensor.<sensor>.state` object, creating
/// intermediate objects as needed.
fn state_slot<'doc>(
    target: &'doc mut JsonMap,
    sensor: &str,
) -> Result<&'doc mut JsonMap, MergeError> {
    let mut node = target;
    let mut walked = String::new();
    for segment in ["entity", "sensor", sensor, "state"] {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);
        let slot = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(JsonMap::new()));
        node = slot.as_object_mut().ok_or_else(|| MergeError::Shape {
            path: walked.clone(),
        })?;
    }
    Ok(node)
}
