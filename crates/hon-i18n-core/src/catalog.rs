// crates/hon-i18n-core/src/catalog.rs
// ============================================================================
// Module: hon-i18n Vendor Catalog
// Description: Dotted-key resolution over hOn translation catalogs.
// Purpose: Turn vendor catalog keys into display labels without ever failing.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A vendor catalog is a nested JSON object whose leaves are display strings.
//! Keys are dotted paths such as `WASHING_CMD&CTRL.PHASE_READY.TITLE`; the
//! resolver splits on `.` and descends one object level per segment.
//!
//! ## Invariants
//! - Resolution is total: malformed keys, missing segments, and non-object
//!   intermediates all degrade to "no label", never to an error or panic.
//! - Only non-empty leaf strings count as resolved labels; anything else
//!   (objects, arrays, numbers, empty strings) falls through to the fallback.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::store::JsonMap;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// A per-language vendor translation catalog.
///
/// # Invariants
/// - The catalog is read-only after construction.
/// - An empty catalog resolves every key to `None`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Root object of the catalog document.
    entries: JsonMap,
}

impl Catalog {
    /// Wraps a loaded catalog document.
    #[must_use]
    pub const fn new(entries: JsonMap) -> Self {
        Self {
            entries,
        }
    }

    /// Returns true when the catalog holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a dotted key to its leaf label.
    ///
    /// The walk descends one object level per `.`-separated segment. A
    /// missing segment or a non-object intermediate does not abort the walk;
    /// it simply leaves nothing to find, so the result is `None`. The final
    /// value counts only when it is a non-empty string.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let mut node: Option<&JsonMap> = Some(&self.entries);
        let mut value: Option<&Value> = None;
        for segment in key.split('.') {
            value = node.and_then(|object| object.get(segment));
            node = value.and_then(Value::as_object);
        }
        value.and_then(Value::as_str).filter(|label| !label.is_empty())
    }
}

impl From<JsonMap> for Catalog {
    fn from(entries: JsonMap) -> Self {
        Self::new(entries)
    }
}

// ============================================================================
// SECTION: Label Resolution
// ============================================================================

/// Resolves a dotted key against a primary catalog with a one-shot fallback.
///
/// When the primary catalog yields no label and a fallback catalog was
/// supplied, the entire walk repeats once against the fallback; there is no
/// further cascading. An unresolvable key yields the empty string.
#[must_use]
pub fn resolve_label(key: &str, primary: &Catalog, fallback: Option<&Catalog>) -> String {
    if let Some(label) = primary.resolve(key) {
        return label.to_string();
    }
    fallback
        .and_then(|catalog| catalog.resolve(key))
        .map_or_else(String::new, ToString::to_string)
}
