//! Supported locales and localized text pairs
//!
//! The newsroom UI is bilingual; every role and permission carries an Arabic
//! and an English label. Locale tags arrive from HTTP collaborators as
//! strings (`Accept-Language` style) and are parsed into a closed enum, so
//! label lookups themselves are total.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AccessError, Result};

/// A supported display locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Arabic (the platform's primary locale)
    Arabic,
    /// English
    English,
}

impl Locale {
    /// Parse a locale from a tag string
    ///
    /// Accepts bare language codes and region-qualified tags
    /// (`ar`, `ar-SA`, `en`, `en_US`, ...), case-insensitively.
    pub fn parse(tag: &str) -> Option<Self> {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or(tag)
            .to_lowercase();
        match language.as_str() {
            "ar" | "arabic" => Some(Self::Arabic),
            "en" | "english" => Some(Self::English),
            _ => None,
        }
    }

    /// Parse a locale from a tag string, failing on unsupported tags
    ///
    /// Unsupported tags are an error, not a fallback: a caller that asks for
    /// Urdu labels gets `UnknownLocale` rather than silently English.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Self::parse(tag).ok_or_else(|| AccessError::unknown_locale(tag))
    }

    /// Convert to the canonical tag string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An Arabic/English text pair
///
/// Authored as static constants alongside the role and permission tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    /// Arabic text
    pub ar: &'static str,
    /// English text
    pub en: &'static str,
}

impl Localized {
    /// Create a localized pair
    pub const fn new(ar: &'static str, en: &'static str) -> Self {
        Self { ar, en }
    }

    /// Get the text for a locale
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Arabic => self.ar,
            Locale::English => self.en,
        }
    }
}
