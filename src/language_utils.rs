use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::errors::TranslationError;

/// Language utilities for the supported language set
///
/// This module defines the five languages the bundled translation models
/// cover and provides parsing from ISO 639-1/639-3 codes or English names,
/// backed by the isolang crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
    German,
    Spanish,
    Swedish,
}

impl Language {
    /// All supported languages, in UI display order
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Swedish,
    ];

    /// ISO 639-1 (2-letter) code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::German => "de",
            Self::Spanish => "es",
            Self::Swedish => "sv",
        }
    }

    /// English name of this language
    pub fn name(&self) -> &'static str {
        self.iso().to_name()
    }

    /// The isolang representation of this language
    fn iso(&self) -> isolang::Language {
        match self {
            Self::English => isolang::Language::Eng,
            Self::French => isolang::Language::Fra,
            Self::German => isolang::Language::Deu,
            Self::Spanish => isolang::Language::Spa,
            Self::Swedish => isolang::Language::Swe,
        }
    }

    /// Parse a language from an ISO 639-1/639-3 code or an English name
    ///
    /// Accepts e.g. "en", "eng", "English", "FR". Codes that are valid ISO
    /// languages but outside the supported set are rejected.
    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(anyhow!("Empty language code"));
        }

        let iso = match normalized.len() {
            2 => isolang::Language::from_639_1(&normalized),
            3 => isolang::Language::from_639_3(&normalized),
            _ => Self::ALL
                .into_iter()
                .find(|lang| lang.name().to_lowercase() == normalized)
                .map(|lang| lang.iso()),
        };

        let iso = iso.ok_or_else(|| anyhow!("Invalid language code: {}", code))?;

        Self::ALL
            .into_iter()
            .find(|lang| lang.iso() == iso)
            .ok_or_else(|| {
                anyhow!(
                    "Unsupported language: {} (supported: English, French, German, Spanish, Swedish)",
                    iso.to_name()
                )
            })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

/// A source/target language direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Source language
    pub source: Language,

    /// Target language
    pub target: Language,
}

impl LanguagePair {
    /// Create a new language pair, rejecting identical source and target
    pub fn new(source: Language, target: Language) -> Result<Self, TranslationError> {
        if source == target {
            return Err(TranslationError::SameLanguage(source));
        }

        Ok(Self { source, target })
    }

    /// The same pair with source and target swapped
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source.code(), self.target.code())
    }
}
