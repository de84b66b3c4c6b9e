// crates/hon-i18n-cli/src/lib.rs
// ============================================================================
// Module: hon-i18n CLI Library
// Description: Shared components for the hon-i18n command-line interface.
// Purpose: Provide reusable pieces (api, config, i18n, sync) for the binary and tests.
// Dependencies: hon-i18n-core, reqwest, serde, thiserror, toml, url.
// ============================================================================

//! ## Overview
//! This library module houses the pieces of the translation maintenance CLI
//! that the binary entry point (`src/main.rs`) and the integration tests
//! share: the hOn API client, the sync configuration loader, the sync driver,
//! and the internationalized message catalog. All user-facing output is
//! routed through the [`t!`](crate::t) macro so it stays consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Anonymous hOn mobile-API client for fetching translation catalogs.
pub mod api;

/// Sync configuration loading and validation.
pub mod config;

/// Internationalization helpers and message catalog.
pub mod i18n;

/// Catalog fetch and sensor-state sync drivers.
pub mod sync;
