//! Internationalization (i18n) for the catalog UI.
//!
//! Two static translation tables (English and German) are embedded into the
//! binary as YAML and flattened into dot-notation keys at startup:
//!
//! ```yaml
//! en:
//!   card:
//!     species: "Species"
//! ```
//!
//! becomes accessible as `card.species`.
//!
//! # Usage
//!
//! ```rust
//! use charbrowse::i18n::{Language, Translations};
//!
//! let tables = Translations::load();
//! assert_eq!(tables.get(Language::De, "card.species"), "Spezies");
//! ```
//!
//! # Error Handling
//!
//! - Missing keys fall back to English, then to the key itself
//! - A locale table that fails to parse is logged and treated as empty

mod loader;
pub mod translations;

pub use loader::{EMBEDDED_DE, EMBEDDED_EN, parse_locale_yaml};
pub use translations::{TranslationMap, translate_with_fallback};

use crate::state::CharacterStatus;

/// UI languages with a bundled translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (default and fallback).
    #[default]
    En,
    /// German.
    De,
}

impl Language {
    /// Short language code used in settings and on the command line.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// What: Parse a language code.
    ///
    /// Inputs:
    /// - `code`: Code such as "de", "DE" or "de-CH"
    ///
    /// Output:
    /// - `Some(Language)` for English or German variants; `None` otherwise.
    ///
    /// Details:
    /// - Region tags after `-` or `_` are ignored.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// The other language; the toggle only ever flips between the two.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::De,
            Self::De => Self::En,
        }
    }
}

/// Both translation tables, loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    /// English labels, also used as fallback.
    pub en: TranslationMap,
    /// German labels.
    pub de: TranslationMap,
}

impl Translations {
    /// What: Parse the embedded locale tables.
    ///
    /// Output:
    /// - `Translations` with both maps populated.
    ///
    /// Details:
    /// - A table that fails to parse is logged and left empty so lookups fall back
    ///   to English or the raw key instead of aborting startup.
    #[must_use]
    pub fn load() -> Self {
        let parse = |lang: Language, content: &str| {
            parse_locale_yaml(content).unwrap_or_else(|e| {
                tracing::warn!(language = lang.code(), error = %e, "failed to parse locale table");
                TranslationMap::new()
            })
        };
        Self {
            en: parse(Language::En, EMBEDDED_EN),
            de: parse(Language::De, EMBEDDED_DE),
        }
    }

    /// Table for a language.
    #[must_use]
    pub const fn table(&self, lang: Language) -> &TranslationMap {
        match lang {
            Language::En => &self.en,
            Language::De => &self.de,
        }
    }

    /// What: Look up a label.
    ///
    /// Inputs:
    /// - `lang`: Active language
    /// - `key`: Dot-notation key
    ///
    /// Output:
    /// - Translation, English fallback, or the key itself.
    #[must_use]
    pub fn get(&self, lang: Language, key: &str) -> String {
        translate_with_fallback(key, self.table(lang), &self.en)
    }

    /// What: Look up a label and substitute `{}` placeholders in order.
    ///
    /// Details:
    /// - "Page {} of {}" with `[2, 7]` becomes "Page 2 of 7".
    #[must_use]
    pub fn get_fmt(&self, lang: Language, key: &str, args: &[&dyn std::fmt::Display]) -> String {
        let mut result = self.get(lang, key);
        for arg in args {
            result = result.replacen("{}", &arg.to_string(), 1);
        }
        result
    }

    /// What: Display label for a raw status string.
    ///
    /// Details:
    /// - Matching is case-insensitive; unknown values use the "unknown" label.
    #[must_use]
    pub fn status_label(&self, lang: Language, raw_status: &str) -> String {
        self.get(lang, CharacterStatus::from_api(raw_status).translation_key())
    }
}
