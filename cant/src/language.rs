//! Supported natural languages
//!
//! Each language has its own term table, stop-word set and rules for
//! normalizing gloss text into lookup keys.

use crate::error::{CantError, CantResult};
use icu_locale::{Locale, locale};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A natural language paired with an argot vocabulary
///
/// English is paired with Thieves' Cant, French with argot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// Every language with a term table, in display order
    pub const ALL: [Language; 2] = [Language::English, Language::French];

    /// ISO 639-1 code, also used as the term table file stem
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    /// Locale used for collation
    pub fn locale(&self) -> Locale {
        match self {
            Language::English => locale!("en"),
            Language::French => locale!("fr"),
        }
    }

    /// Name of the argot vocabulary paired with this language
    pub fn argot_name(&self) -> &'static str {
        match self {
            Language::English => "Thieves' Cant",
            Language::French => "Argot",
        }
    }

    /// Resolve a BCP 47 locale to a supported language
    ///
    /// Only the language subtag is considered, so `fr-FR`, `fr-CA` and `fr`
    /// all resolve to [`Language::French`].
    ///
    /// # Errors
    /// - The locale cannot be parsed
    /// - The language has no term table
    pub fn from_locale(locale_str: &str) -> CantResult<Self> {
        let locale: Locale = locale_str.trim().parse().map_err(|e| {
            CantError::UnsupportedLanguage(format!(
                "Failed to parse locale '{}': {}",
                locale_str, e
            ))
        })?;

        match locale.id.language.as_str() {
            "en" => Ok(Language::English),
            "fr" => Ok(Language::French),
            other => Err(CantError::UnsupportedLanguage(format!(
                "No term table for language '{}'",
                other
            ))),
        }
    }

    /// Regex class of characters removed from a gloss word before it becomes a key
    pub fn gloss_strip_pattern(&self) -> &'static str {
        match self {
            Language::English => "[^a-z]",
            Language::French => "[^a-zàâäéèêëïîôùûüç]",
        }
    }

    /// Regex of the separators gloss text is split on
    pub fn gloss_split_pattern(&self) -> &'static str {
        match self {
            Language::English => r"[\s,;]+",
            Language::French => r"[\s,;()]+",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_locale(s)
    }
}
