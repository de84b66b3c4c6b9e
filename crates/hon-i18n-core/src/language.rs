// crates/hon-i18n-core/src/language.rs
// ============================================================================
// Module: hon-i18n Language Set
// Description: The fixed set of languages published by the hOn catalog.
// Purpose: Provide stable language codes for fetch loops and file naming.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! The hOn cloud publishes translation catalogs for a fixed set of languages.
//! [`SUPPORTED_LANGUAGES`] drives every per-language loop in the sync tool and
//! its ordering is stable so runs are deterministic.
//!
//! ## Invariants
//! - [`Language::En`] is the designated fallback catalog language.
//! - Codes match the vendor's catalog file names one to one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Language
// ============================================================================

/// A language code supported by the hOn translation catalog.
///
/// # Invariants
/// - Variants are stable; the vendor's catalog set is fixed.
/// - [`Language::as_str`] values are valid file stems for catalog files.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    /// Czech.
    Cs,
    /// German.
    De,
    /// Greek.
    El,
    /// English (fallback catalog).
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// Hebrew.
    He,
    /// Croatian.
    Hr,
    /// Italian.
    It,
    /// Dutch.
    Nl,
    /// Polish.
    Pl,
    /// Portuguese.
    Pt,
    /// Romanian.
    Ro,
    /// Russian.
    Ru,
    /// Slovak.
    Sk,
    /// Slovenian.
    Sl,
    /// Serbian.
    Sr,
    /// Turkish.
    Tr,
    /// Chinese.
    Zh,
}

impl Language {
    /// Returns the canonical lowercase language code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::De => "de",
            Self::El => "el",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::He => "he",
            Self::Hr => "hr",
            Self::It => "it",
            Self::Nl => "nl",
            Self::Pl => "pl",
            Self::Pt => "pt",
            Self::Ro => "ro",
            Self::Ru => "ru",
            Self::Sk => "sk",
            Self::Sl => "sl",
            Self::Sr => "sr",
            Self::Tr => "tr",
            Self::Zh => "zh",
        }
    }

    /// Attempts to parse a language code (case-insensitive, tolerant of
    /// region suffixes such as `de-DE` or `de_DE`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let code = normalized.split(['-', '_']).next().unwrap_or("");
        SUPPORTED_LANGUAGES.iter().copied().find(|language| language.as_str() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Ordered list of every language the vendor catalog publishes.
///
/// # Invariants
/// - Ordering is stable; fetch and merge loops iterate in this order.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language::Cs,
    Language::De,
    Language::El,
    Language::En,
    Language::Es,
    Language::Fr,
    Language::He,
    Language::Hr,
    Language::It,
    Language::Nl,
    Language::Pl,
    Language::Pt,
    Language::Ro,
    Language::Ru,
    Language::Sk,
    Language::Sl,
    Language::Sr,
    Language::Tr,
    Language::Zh,
];

// ============================================================================
// SECTION: Tests
// ============================================================================
