/*!
 * Tests for the back-translation checker
 */

use polyglotlab::language_utils::{Language, LanguagePair};
use polyglotlab::models::mock::MockLoader;
use polyglotlab::translation::{
    BackTranslationChecker, Domain, Tone, TranslationRequest, Translator,
};

use crate::common::{mock_registry, mock_registry_with};

fn checker_over(registry: std::sync::Arc<polyglotlab::registry::ModelRegistry>) -> BackTranslationChecker {
    BackTranslationChecker::new(Translator::new(registry))
}

/// Test the neutral/general scenario: exactly two calls, reversed pair,
/// backward input equal to the forward output
#[tokio::test]
async fn test_check_shouldFeedForwardOutputIntoReversedPair() {
    let (registry, loader) = mock_registry();
    let checker = checker_over(registry);

    let pair = LanguagePair::new(Language::English, Language::German).unwrap();
    let request = TranslationRequest::new("The cat sat on the mat.", pair);
    let result = checker.check(&request).await.unwrap();

    assert_eq!(
        loader.loaded_identifiers(),
        vec![
            "Helsinki-NLP/opus-mt-en-de".to_string(),
            "Helsinki-NLP/opus-mt-de-en".to_string(),
        ]
    );

    let forward_model = loader.model("Helsinki-NLP/opus-mt-en-de").unwrap();
    let backward_model = loader.model("Helsinki-NLP/opus-mt-de-en").unwrap();

    assert_eq!(forward_model.call_count(), 1);
    assert_eq!(backward_model.call_count(), 1);
    assert_eq!(
        backward_model.last_input().unwrap(),
        result.forward.output_text
    );
    assert_eq!(
        result.forward.output_text,
        "[Helsinki-NLP/opus-mt-en-de] The cat sat on the mat."
    );
    assert!(!result.backward.output_text.is_empty());
}

/// Test that tone and domain are carried through to the backward leg
#[tokio::test]
async fn test_check_withHints_shouldCarryToneAndDomainThroughBothLegs() {
    let (registry, loader) = mock_registry();
    let checker = checker_over(registry);

    let pair = LanguagePair::new(Language::English, Language::French).unwrap();
    let request = TranslationRequest::new("Quarterly results are strong.", pair)
        .with_tone(Tone::Formal)
        .with_domain(Domain::Business);
    let result = checker.check(&request).await.unwrap();

    let forward_model = loader.model("Helsinki-NLP/opus-mt-en-fr").unwrap();
    let forward_input = forward_model.last_input().unwrap();
    assert!(forward_input.starts_with("[Business context, Formal tone in French] "));

    // Backward leg targets the source language, so the hint names English
    let backward_model = loader.model("Helsinki-NLP/opus-mt-fr-en").unwrap();
    let backward_input = backward_model.last_input().unwrap();
    assert!(backward_input.starts_with("[Business context, Formal tone in English] "));
    assert!(backward_input.ends_with(&result.forward.output_text));
}

/// Test atomic failure: a failing forward call leaves the backward leg unrun
#[tokio::test]
async fn test_check_withFailingForward_shouldNotRunBackward() {
    let (registry, loader) = mock_registry_with(MockLoader::failing());
    let checker = checker_over(registry);

    let pair = LanguagePair::new(Language::English, Language::German).unwrap();
    let request = TranslationRequest::new("The cat sat on the mat.", pair);
    let result = checker.check(&request).await;

    assert!(result.is_err());
    assert_eq!(
        loader.loaded_identifiers(),
        vec!["Helsinki-NLP/opus-mt-en-de".to_string()]
    );
    assert!(loader.model("Helsinki-NLP/opus-mt-de-en").is_none());
}

/// Test that an unsupported pair fails before any model interaction
#[tokio::test]
async fn test_check_withUnsupportedPair_shouldFailWithoutModelCall() {
    let (registry, loader) = mock_registry();
    let checker = checker_over(registry);

    let pair = LanguagePair::new(Language::Spanish, Language::Swedish).unwrap();
    let request = TranslationRequest::new("Hola", pair);

    assert!(checker.check(&request).await.is_err());
    assert_eq!(loader.load_count(), 0);
}
