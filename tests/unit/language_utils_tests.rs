/*!
 * Tests for the supported language set and pair handling
 */

use polyglotlab::errors::TranslationError;
use polyglotlab::language_utils::{Language, LanguagePair};

/// Test parsing from ISO 639-1 codes
#[test]
fn test_fromCode_withTwoLetterCodes_shouldParseSupportedLanguages() {
    assert_eq!(Language::from_code("en").unwrap(), Language::English);
    assert_eq!(Language::from_code("fr").unwrap(), Language::French);
    assert_eq!(Language::from_code("de").unwrap(), Language::German);
    assert_eq!(Language::from_code("es").unwrap(), Language::Spanish);
    assert_eq!(Language::from_code("sv").unwrap(), Language::Swedish);
}

/// Test parsing is case-insensitive and trims whitespace
#[test]
fn test_fromCode_withMessyInput_shouldNormalize() {
    assert_eq!(Language::from_code(" EN ").unwrap(), Language::English);
    assert_eq!(Language::from_code("Fr").unwrap(), Language::French);
}

/// Test parsing from ISO 639-3 codes
#[test]
fn test_fromCode_withThreeLetterCodes_shouldParseSupportedLanguages() {
    assert_eq!(Language::from_code("eng").unwrap(), Language::English);
    assert_eq!(Language::from_code("fra").unwrap(), Language::French);
    assert_eq!(Language::from_code("deu").unwrap(), Language::German);
    assert_eq!(Language::from_code("spa").unwrap(), Language::Spanish);
    assert_eq!(Language::from_code("swe").unwrap(), Language::Swedish);
}

/// Test parsing from English names
#[test]
fn test_fromCode_withEnglishNames_shouldParseSupportedLanguages() {
    assert_eq!(Language::from_code("English").unwrap(), Language::English);
    assert_eq!(Language::from_code("swedish").unwrap(), Language::Swedish);
    assert_eq!(Language::from_code("GERMAN").unwrap(), Language::German);
}

/// Test that valid but unsupported languages are rejected
#[test]
fn test_fromCode_withUnsupportedLanguage_shouldFail() {
    assert!(Language::from_code("ja").is_err());
    assert!(Language::from_code("it").is_err());
}

/// Test that invalid codes are rejected
#[test]
fn test_fromCode_withInvalidCode_shouldFail() {
    assert!(Language::from_code("").is_err());
    assert!(Language::from_code("  ").is_err());
    assert!(Language::from_code("zz").is_err());
    assert!(Language::from_code("elvish").is_err());
}

/// Test ISO codes and display names
#[test]
fn test_codeAndName_shouldMatchIsoValues() {
    assert_eq!(Language::English.code(), "en");
    assert_eq!(Language::Swedish.code(), "sv");
    assert_eq!(Language::German.name(), "German");
    assert_eq!(Language::French.to_string(), "French");
}

/// Test pair construction rejects identical source and target
#[test]
fn test_languagePair_withSameLanguages_shouldFail() {
    let result = LanguagePair::new(Language::English, Language::English);
    assert!(matches!(
        result,
        Err(TranslationError::SameLanguage(Language::English))
    ));
}

/// Test pair reversal
#[test]
fn test_languagePair_reversed_shouldSwapDirections() {
    let pair = LanguagePair::new(Language::English, Language::German).unwrap();
    let reversed = pair.reversed();

    assert_eq!(reversed.source, Language::German);
    assert_eq!(reversed.target, Language::English);
    assert_eq!(reversed.reversed(), pair);
}

/// Test pair display format
#[test]
fn test_languagePair_display_shouldUseIsoCodes() {
    let pair = LanguagePair::new(Language::Spanish, Language::English).unwrap();
    assert_eq!(pair.to_string(), "es -> en");
}
