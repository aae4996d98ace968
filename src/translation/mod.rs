/*!
 * Translation orchestration for the supported language pairs.
 *
 * This module contains the request model and the two translation-facing
 * components. It is split into several submodules:
 *
 * - `core`: The translator, one model inference per request
 * - `back_translation`: Round-trip consistency checking
 * - `hints`: Tone/domain hint construction for model input
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::language_utils::LanguagePair;

// Re-export main types for easier usage
pub use self::back_translation::BackTranslationChecker;
pub use self::core::Translator;

// Submodules
pub mod back_translation;
pub mod core;
pub mod hints;

/// Tone hint for a translation request
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Formal,
    Informal,
    Simplified,
}

impl Tone {
    /// Capitalized tone name as shown in the UI
    pub fn display_name(&self) -> &str {
        match self {
            Self::Neutral => "Neutral",
            Self::Formal => "Formal",
            Self::Informal => "Informal",
            Self::Simplified => "Simplified",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Tone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "neutral" => Ok(Self::Neutral),
            "formal" => Ok(Self::Formal),
            "informal" => Ok(Self::Informal),
            "simplified" => Ok(Self::Simplified),
            _ => Err(anyhow!("Invalid tone: {}", s)),
        }
    }
}

/// Domain hint for a translation request
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    General,
    Business,
    Technical,
    Casual,
}

impl Domain {
    /// Capitalized domain name as shown in the UI
    pub fn display_name(&self) -> &str {
        match self {
            Self::General => "General",
            Self::Business => "Business",
            Self::Technical => "Technical",
            Self::Casual => "Casual",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Domain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "business" => Ok(Self::Business),
            "technical" => Ok(Self::Technical),
            "casual" => Ok(Self::Casual),
            _ => Err(anyhow!("Invalid domain: {}", s)),
        }
    }
}

/// One translation request, created per UI interaction and discarded after
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Text to translate (non-empty)
    pub text: String,

    /// Source/target direction
    pub pair: LanguagePair,

    /// Tone hint
    pub tone: Tone,

    /// Domain hint
    pub domain: Domain,
}

impl TranslationRequest {
    /// Create a request with default tone and domain
    pub fn new(text: impl Into<String>, pair: LanguagePair) -> Self {
        Self {
            text: text.into(),
            pair,
            tone: Tone::default(),
            domain: Domain::default(),
        }
    }

    /// Set the tone hint
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Set the domain hint
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }
}

/// Output of one translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    /// Decoded target-language text
    pub output_text: String,
}

/// Output of a round-trip consistency check
///
/// Meaning preservation is judged by the human reader comparing the original
/// text with `backward.output_text`; no similarity scoring is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackTranslationResult {
    /// Source -> target translation
    pub forward: TranslationResult,

    /// Target -> source translation of the forward output
    pub backward: TranslationResult,
}
