// crates/hon-i18n-cli/src/sync.rs
// ============================================================================
// Module: Synchronization Driver
// Description: Catalog caching and integration-file merge orchestration.
// Purpose: Run the fetch-resolve-merge-write cycle across all languages.
// Dependencies: hon-i18n-core, thiserror, crate::api.
// ============================================================================

//! ## Overview
//! The driver runs in two phases. The cache phase walks the language set in
//! order and downloads each catalog whose cache file is absent; existing
//! files are never re-fetched or rewritten. The merge phase then loads each
//! cached catalog, resolves the sensor phase tables against it with the
//! English catalog as fallback, stamps the labels into the language's
//! integration file, and writes the file back.
//!
//! ## Invariants
//! - Languages are processed strictly sequentially, in catalog order.
//! - A cached catalog file is authoritative; the cache phase never replaces
//!   one that exists.
//! - English fallback is disabled when the English catalog is absent or
//!   empty.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use hon_i18n_core::Catalog;
use hon_i18n_core::Language;
use hon_i18n_core::MergeError;
use hon_i18n_core::MergeStats;
use hon_i18n_core::SUPPORTED_LANGUAGES;
use hon_i18n_core::StoreError;
use hon_i18n_core::apply_sensor_states;
use hon_i18n_core::catalog_path;
use hon_i18n_core::integration_path;
use hon_i18n_core::load_json_if_present;
use hon_i18n_core::save_json;
use thiserror::Error;

use crate::api::ApiError;
use crate::api::HonApiClient;
use crate::config::SyncConfig;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failure during a synchronization run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The catalog cache directory could not be created.
    #[error("failed to create cache directory {path}: {detail}")]
    CacheDir {
        /// Directory that could not be created.
        path: String,
        /// Underlying I/O error description.
        detail: String,
    },
    /// A vendor API request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A catalog or integration file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// An integration document rejected the sensor state merge.
    #[error(transparent)]
    Merge(#[from] MergeError),
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Cache status of one language's vendor catalog.
#[derive(Debug, Clone)]
pub struct CatalogStatus {
    /// Language the catalog belongs to.
    pub language: Language,
    /// Cache file holding the catalog.
    pub path: PathBuf,
    /// Whether this pass downloaded the catalog.
    pub fetched: bool,
}

/// Outcome of one catalog-cache pass.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Per-language catalog status, in request order.
    pub catalogs: Vec<CatalogStatus>,
}

impl FetchOutcome {
    /// Returns the number of catalogs downloaded during the pass.
    #[must_use]
    pub fn fetched(&self) -> usize {
        self.catalogs.iter().filter(|status| status.fetched).count()
    }

    /// Returns the number of catalogs already cached before the pass.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.catalogs.iter().filter(|status| !status.fetched).count()
    }
}

/// Merge result for one language's integration file.
#[derive(Debug, Clone)]
pub struct LanguageReport {
    /// Language the integration file belongs to.
    pub language: Language,
    /// Integration translation file that was updated.
    pub path: PathBuf,
    /// Written and unresolved label counts for the file.
    pub stats: MergeStats,
}

/// Outcome of a full synchronization run.
#[derive(Debug)]
pub struct SyncReport {
    /// Catalog-cache phase outcome.
    pub fetch: FetchOutcome,
    /// Per-language merge results, in catalog order.
    pub languages: Vec<LanguageReport>,
}

impl SyncReport {
    /// Returns the total number of labels written across all languages.
    #[must_use]
    pub fn total_written(&self) -> usize {
        self.languages.iter().map(|report| report.stats.written).sum()
    }

    /// Returns the total number of unresolved codes across all languages.
    #[must_use]
    pub fn total_missing(&self) -> usize {
        self.languages.iter().map(|report| report.stats.missing).sum()
    }
}

// ============================================================================
// SECTION: Cache Phase
// ============================================================================

/// Ensures every requested language has a cached catalog file.
///
/// Creates the cache directory when absent, then walks the languages in
/// order and downloads each catalog whose file does not exist yet. Catalogs
/// already on disk are left untouched.
///
/// # Errors
///
/// Returns [`SyncError`] when the cache directory cannot be created, a
/// download fails, or a fetched catalog cannot be written.
pub async fn ensure_catalogs(
    client: &HonApiClient,
    cache_dir: &Path,
    languages: &[Language],
) -> Result<FetchOutcome, SyncError> {
    fs::create_dir_all(cache_dir).map_err(|err| SyncError::CacheDir {
        path: cache_dir.display().to_string(),
        detail: err.to_string(),
    })?;
    let mut outcome = FetchOutcome::default();
    for &language in languages {
        let path = catalog_path(cache_dir, language);
        let fetched = if path.is_file() {
            false
        } else {
            let catalog = client.translation_catalog(language).await?;
            save_json(&path, &catalog)?;
            true
        };
        outcome.catalogs.push(CatalogStatus {
            language,
            path,
            fetched,
        });
    }
    Ok(outcome)
}

// ============================================================================
// SECTION: Merge Phase
// ============================================================================

/// Runs the full synchronization cycle over every supported language.
///
/// # Errors
///
/// Returns [`SyncError`] when catalog caching fails, a file cannot be read
/// or written, or an integration document has a non-object in the sensor
/// state path.
pub async fn run(config: &SyncConfig, client: &HonApiClient) -> Result<SyncReport, SyncError> {
    let fetch = ensure_catalogs(client, &config.cache_dir, SUPPORTED_LANGUAGES).await?;
    let english_path = catalog_path(&config.cache_dir, Language::En);
    let english = Catalog::from(load_json_if_present(&english_path)?);
    let fallback = (!english.is_empty()).then_some(&english);
    let mut languages = Vec::with_capacity(SUPPORTED_LANGUAGES.len());
    for &language in SUPPORTED_LANGUAGES {
        let cached = load_json_if_present(&catalog_path(&config.cache_dir, language))?;
        let catalog = Catalog::from(cached);
        let path = integration_path(&config.integration_dir, language);
        let mut document = load_json_if_present(&path)?;
        let stats = apply_sensor_states(&mut document, &catalog, fallback)?;
        save_json(&path, &document)?;
        languages.push(LanguageReport {
            language,
            path,
            stats,
        });
    }
    Ok(SyncReport {
        fetch,
        languages,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
