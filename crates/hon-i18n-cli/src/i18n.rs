// crates/hon-i18n-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings for future localization support.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The hon-i18n CLI stores user-facing strings in a small translation catalog
//! to enforce consistent messaging and to prepare for future locales. All
//! runtime output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - Variants are stable for CLI parsing and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// German.
    De,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
///
/// # Invariants
/// - Ordering is stable for deterministic presentation.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::De];

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries loaded into the localized message bundle.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "hon-i18n {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("api.client_failed", "Failed to initialize hOn API client: {error}"),
    (
        "fetch.language.invalid",
        "Unsupported language: {value}. Expected one of: {supported}.",
    ),
    ("fetch.failed", "Failed to fetch translation catalogs: {error}"),
    ("fetch.cached", "{language}: catalog already cached at {path}"),
    ("fetch.fetched", "{language}: catalog fetched -> {path}"),
    ("fetch.summary", "Catalogs ready: {fetched} fetched, {cached} already cached."),
    ("sync.failed", "Translation sync failed: {error}"),
    (
        "sync.language.updated",
        "{language}: {written} sensor states written ({missing} unresolved) -> {path}",
    ),
    (
        "sync.summary",
        "Sync complete: {languages} languages updated, {written} labels written, {missing} \
         unresolved.",
    ),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'de'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine-translated and may be inaccurate.",
    ),
];

/// Static German catalog entries loaded into the localized message bundle.
const CATALOG_DE: &[(&str, &str)] = &[
    ("main.version", "hon-i18n {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "Ausgabe"),
    ("output.write_failed", "Schreiben auf {stream} fehlgeschlagen: {error}"),
    ("config.load_failed", "Konfiguration konnte nicht geladen werden: {error}"),
    ("config.validate.ok", "Konfiguration gültig."),
    ("api.client_failed", "hOn-API-Client konnte nicht initialisiert werden: {error}"),
    (
        "fetch.language.invalid",
        "Nicht unterstützte Sprache: {value}. Erwartet wird eine von: {supported}.",
    ),
    ("fetch.failed", "Abruf der Übersetzungskataloge fehlgeschlagen: {error}"),
    ("fetch.cached", "{language}: Katalog bereits zwischengespeichert unter {path}"),
    ("fetch.fetched", "{language}: Katalog abgerufen -> {path}"),
    (
        "fetch.summary",
        "Kataloge bereit: {fetched} abgerufen, {cached} bereits zwischengespeichert.",
    ),
    ("sync.failed", "Übersetzungsabgleich fehlgeschlagen: {error}"),
    (
        "sync.language.updated",
        "{language}: {written} Sensorzustände geschrieben ({missing} nicht aufgelöst) -> {path}",
    ),
    (
        "sync.summary",
        "Abgleich abgeschlossen: {languages} Sprachen aktualisiert, {written} Beschriftungen \
         geschrieben, {missing} nicht aufgelöst.",
    ),
    ("i18n.lang.invalid_env", "Ungültiger Wert für {env}: {value}. Erwartet wird 'en' oder 'de'."),
    (
        "i18n.disclaimer.machine_translated",
        "Hinweis: Nicht-englische Ausgabe ist maschinell übersetzt und kann ungenau sein.",
    ),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_DE_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::De => CATALOG_DE_MAP.get_or_init(|| CATALOG_DE.iter().copied().collect()),
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let locale = current_locale();
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

// ============================================================================
// SECTION: Tests
// ============================================================================
