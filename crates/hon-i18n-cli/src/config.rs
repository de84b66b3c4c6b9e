// crates/hon-i18n-cli/src/config.rs
// ============================================================================
// Module: hon-i18n Sync Configuration
// Description: Loads and validates the translation sync configuration file.
// Purpose: Resolve directories and vendor API settings with safe defaults.
// Dependencies: serde, thiserror, toml, url.
// ============================================================================

//! ## Overview
//! The sync configuration names the two directories the tool works in (the
//! vendor catalog cache and the integration translation files) plus the hOn
//! API endpoint and request timeout. The file is optional: running without
//! one uses the defaults that match the integration repository layout.
//!
//! ## Invariants
//! - An explicit path (flag or `HON_I18N_CONFIG`) must name a readable file;
//!   only the implicit `hon-i18n.toml` lookup may silently fall back to
//!   defaults.
//! - Unknown fields, oversized files, and non-UTF-8 contents are rejected.
//! - A loaded configuration is always validated before use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default config file name resolved from the working directory.
const DEFAULT_CONFIG_NAME: &str = "hon-i18n.toml";
/// Environment variable overriding the config file path.
pub const CONFIG_ENV_VAR: &str = "HON_I18N_CONFIG";
/// Maximum accepted config file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Default directory where fetched vendor catalogs are cached.
const DEFAULT_CACHE_DIR: &str = "translations";
/// Default directory holding the integration translation files.
const DEFAULT_INTEGRATION_DIR: &str = "custom_components/hon/translations";
/// Default hOn mobile-API endpoint.
pub(crate) const DEFAULT_API_ENDPOINT: &str = "https://api-iot.he.services";
/// Default vendor API request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Minimum accepted vendor API request timeout in milliseconds.
const MIN_TIMEOUT_MS: u64 = 1;
/// Maximum accepted vendor API request timeout in milliseconds.
const MAX_TIMEOUT_MS: u64 = 300_000;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Translation sync configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Directory where fetched vendor catalogs are cached.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    /// Directory holding the integration translation files.
    #[serde(default = "default_integration_dir")]
    pub integration_dir: PathBuf,
    /// Vendor API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            integration_dir: default_integration_dir(),
            api: ApiConfig::default(),
        }
    }
}

impl SyncConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// An explicit `path` wins, then [`CONFIG_ENV_VAR`], then the implicit
    /// `hon-i18n.toml` in the working directory. When none of those name a
    /// file, the built-in defaults are used unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when reading, parsing, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(resolved) = resolve_path(path) else {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        };
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("cache_dir must be non-empty".to_string()));
        }
        if self.integration_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("integration_dir must be non-empty".to_string()));
        }
        self.api.validate()
    }
}

/// Vendor API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base endpoint of the hOn mobile API.
    #[serde(default = "default_api_endpoint")]
    pub endpoint: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_api_endpoint(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiConfig {
    /// Validates the vendor API settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the endpoint or timeout is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::Invalid("api.endpoint must be non-empty".to_string()));
        }
        let url = Url::parse(endpoint).map_err(|err| {
            ConfigError::Invalid(format!("api.endpoint is not a valid URL: {err}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(
                "api.endpoint scheme must be http or https".to_string(),
            ));
        }
        if self.timeout_ms < MIN_TIMEOUT_MS || self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::Invalid(format!(
                "api.timeout_ms must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS}"
            )));
        }
        Ok(())
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
///
/// Returns `None` when no file is mandated and the implicit default name does
/// not exist, in which case built-in defaults apply.
fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = path {
        return Some(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(env_path));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_NAME);
    if default.is_file() { Some(default) } else { None }
}

/// Default cache directory for fetched vendor catalogs.
pub(crate) fn default_cache_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_DIR)
}

/// Default directory holding the integration translation files.
pub(crate) fn default_integration_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INTEGRATION_DIR)
}

/// Default hOn mobile-API endpoint.
pub(crate) fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

/// Default vendor API request timeout in milliseconds.
pub(crate) const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SyncConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cache_dir, PathBuf::from("translations"));
        assert_eq!(config.integration_dir, PathBuf::from("custom_components/hon/translations"));
        assert_eq!(config.api.endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.api.timeout_ms, 30_000);
    }

    #[test]
    fn load_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hon-i18n.toml");
        fs::write(
            &path,
            "cache_dir = \"cache\"\nintegration_dir = \"out\"\n\n[api]\nendpoint = \
             \"http://127.0.0.1:9999\"\ntimeout_ms = 5000\n",
        )
        .unwrap();

        let config = SyncConfig::load(Some(&path)).unwrap();
        assert_eq!(config.cache_dir, PathBuf::from("cache"));
        assert_eq!(config.integration_dir, PathBuf::from("out"));
        assert_eq!(config.api.endpoint, "http://127.0.0.1:9999");
        assert_eq!(config.api.timeout_ms, 5_000);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hon-i18n.toml");
        fs::write(&path, "[api]\ntimeout_ms = 1\n").unwrap();

        let config = SyncConfig::load(Some(&path)).unwrap();
        assert_eq!(config.cache_dir, PathBuf::from("translations"));
        assert_eq!(config.api.endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.api.timeout_ms, 1);
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let error = SyncConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(error, ConfigError::Io(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hon-i18n.toml");
        fs::write(&path, "cache_dir = \"cache\"\nrefresh = true\n").unwrap();

        let error = SyncConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hon-i18n.toml");
        let mut contents = String::from("cache_dir = \"cache\"\n");
        contents.push('#');
        contents.push_str(&"x".repeat(MAX_CONFIG_FILE_SIZE));
        fs::write(&path, contents).unwrap();

        let error = SyncConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid(_)));
    }

    #[test]
    fn non_utf8_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hon-i18n.toml");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let error = SyncConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid(_)));
    }

    #[test]
    fn endpoint_scheme_must_be_http_or_https() {
        let config = SyncConfig {
            api: ApiConfig {
                endpoint: "ftp://api-iot.he.services".to_string(),
                ..ApiConfig::default()
            },
            ..SyncConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn endpoint_must_parse_as_url() {
        let config = SyncConfig {
            api: ApiConfig {
                endpoint: "not a url".to_string(),
                ..ApiConfig::default()
            },
            ..SyncConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn timeout_bounds_are_enforced() {
        for timeout_ms in [0_u64, 300_001] {
            let config = SyncConfig {
                api: ApiConfig {
                    timeout_ms,
                    ..ApiConfig::default()
                },
                ..SyncConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "{timeout_ms}");
        }
        for timeout_ms in [1_u64, 300_000] {
            let config = SyncConfig {
                api: ApiConfig {
                    timeout_ms,
                    ..ApiConfig::default()
                },
                ..SyncConfig::default()
            };
            assert!(config.validate().is_ok(), "{timeout_ms}");
        }
    }

    #[test]
    fn empty_directories_are_rejected() {
        let config = SyncConfig {
            cache_dir: PathBuf::new(),
            ..SyncConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn timeout_helper_converts_milliseconds() {
        let api = ApiConfig::default();
        assert_eq!(api.timeout(), Duration::from_millis(30_000));
    }
}
