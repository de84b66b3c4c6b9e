// crates/hon-i18n-core/src/lib.rs
// ============================================================================
// Module: hon-i18n Core Library
// Description: Domain model for hOn translation catalog synchronization.
// Purpose: Resolve vendor catalog keys and merge sensor state labels.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! hon-i18n Core models the data the sync tool moves between the hOn
//! appliance-cloud localization catalog and the Home Assistant integration's
//! translation files: the supported language set, the vendor catalog with its
//! dotted-key addressing, the static sensor phase tables, the merge driver
//! that stamps resolved labels into integration files, and the JSON file
//! store used for both.
//!
//! ## Invariants
//! - Catalog resolution never fails; unresolvable keys degrade to an empty
//!   label instead of an error.
//! - The merge driver only touches `entity.sensor.<name>.state.<code>` leaves
//!   and preserves every other key in the target document.
//! - Phase tables and the language set are compile-time constants.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod language;
pub mod merge;
pub mod sensor;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::Catalog;
pub use catalog::resolve_label;
pub use language::Language;
pub use language::SUPPORTED_LANGUAGES;
pub use merge::MergeError;
pub use merge::MergeStats;
pub use merge::apply_sensor_states;
pub use sensor::DISHWASHER_PHASES;
pub use sensor::MACHINE_MODES;
pub use sensor::SENSOR_TABLES;
pub use sensor::TUMBLE_DRYER_PHASES;
pub use sensor::WASHING_MACHINE_PHASES;
pub use store::JsonMap;
pub use store::StoreError;
pub use store::catalog_path;
pub use store::integration_path;
pub use store::load_json;
pub use store::load_json_if_present;
pub use store::save_json;
