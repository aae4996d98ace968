/*!
 * Tests for the translator
 */

use polyglotlab::errors::TranslationError;
use polyglotlab::language_utils::{Language, LanguagePair};
use polyglotlab::models::mock::MockLoader;
use polyglotlab::translation::{Domain, Tone, TranslationRequest, Translator};

use crate::common::{init_test_logging, mock_registry, mock_registry_with};

fn en_fr() -> LanguagePair {
    LanguagePair::new(Language::English, Language::French).unwrap()
}

/// Test the formal/general scenario: non-empty output, hint precedes text
#[tokio::test]
async fn test_translate_withFormalTone_shouldPrependHintToModelInput() {
    init_test_logging();
    let (registry, loader) = mock_registry();
    let translator = Translator::new(registry);

    let request = TranslationRequest::new("Hello, how are you?", en_fr()).with_tone(Tone::Formal);
    let result = translator.translate(&request).await.unwrap();

    assert!(!result.output_text.is_empty());

    let model = loader.model("Helsinki-NLP/opus-mt-en-fr").unwrap();
    let input = model.last_input().unwrap();
    assert!(input.starts_with("[Formal tone in French] "));
    assert!(input.ends_with("Hello, how are you?"));
}

/// Test that default tone and domain leave the model input untouched
#[tokio::test]
async fn test_translate_withDefaults_shouldPassTextThroughUnchanged() {
    let (registry, loader) = mock_registry();
    let translator = Translator::new(registry);

    let request = TranslationRequest::new("The cat sat on the mat.", en_fr());
    translator.translate(&request).await.unwrap();

    let model = loader.model("Helsinki-NLP/opus-mt-en-fr").unwrap();
    assert_eq!(model.last_input().unwrap(), "The cat sat on the mat.");
}

/// Test that tone and domain hints compose, domain first
#[tokio::test]
async fn test_translate_withToneAndDomain_shouldComposeHint() {
    let (registry, loader) = mock_registry();
    let translator = Translator::new(registry);

    let request = TranslationRequest::new("See attached invoice.", en_fr())
        .with_tone(Tone::Formal)
        .with_domain(Domain::Business);
    translator.translate(&request).await.unwrap();

    let model = loader.model("Helsinki-NLP/opus-mt-en-fr").unwrap();
    let input = model.last_input().unwrap();
    assert!(input.starts_with("[Business context, Formal tone in French] "));
}

/// Test that empty text fails before any model interaction
#[tokio::test]
async fn test_translate_withEmptyText_shouldFailWithoutModelCall() {
    let (registry, loader) = mock_registry();
    let translator = Translator::new(registry);

    for text in ["", "   ", " \n\t "] {
        let request = TranslationRequest::new(text, en_fr());
        let result = translator.translate(&request).await;
        assert!(matches!(result, Err(TranslationError::EmptyText)));
    }

    assert_eq!(loader.load_count(), 0);
}

/// Test that unsupported pairs fail before any model interaction
#[tokio::test]
async fn test_translate_withUnsupportedPair_shouldFailWithoutModelCall() {
    let (registry, loader) = mock_registry();
    let translator = Translator::new(registry);

    let pair = LanguagePair::new(Language::French, Language::German).unwrap();
    let request = TranslationRequest::new("Bonjour", pair);
    let result = translator.translate(&request).await;

    assert!(matches!(
        result,
        Err(TranslationError::UnsupportedPair { .. })
    ));
    assert_eq!(loader.load_count(), 0);
}

/// Test that an inference failure surfaces once, with no retry
#[tokio::test]
async fn test_translate_withFailingModel_shouldSurfaceInferenceErrorWithoutRetry() {
    let (registry, loader) = mock_registry_with(MockLoader::failing());
    let translator = Translator::new(registry);

    let request = TranslationRequest::new("Hello", en_fr());
    let result = translator.translate(&request).await;

    assert!(matches!(result, Err(TranslationError::Inference(_))));

    let model = loader.model("Helsinki-NLP/opus-mt-en-fr").unwrap();
    assert_eq!(model.call_count(), 1);
}

/// Test that decoded output is trimmed but otherwise untouched
#[tokio::test]
async fn test_translate_withPaddedOutput_shouldTrimSurroundingWhitespaceOnly() {
    let loader = MockLoader::new(polyglotlab::models::mock::MockBehavior::Padded);
    let (registry, loader) = mock_registry_with(loader);
    let translator = Translator::new(registry);

    let request = TranslationRequest::new("Hello  world", en_fr());
    let result = translator.translate(&request).await.unwrap();

    assert_eq!(
        result.output_text,
        "[Helsinki-NLP/opus-mt-en-fr] Hello  world"
    );
}

/// Test that repeated requests for one direction reuse the loaded model
#[tokio::test]
async fn test_translate_repeatedRequests_shouldReuseLoadedModel() {
    let (registry, loader) = mock_registry();
    let translator = Translator::new(registry);

    for text in ["One", "Two", "Three"] {
        let request = TranslationRequest::new(text, en_fr());
        translator.translate(&request).await.unwrap();
    }

    assert_eq!(loader.load_count(), 1);
    let model = loader.model("Helsinki-NLP/opus-mt-en-fr").unwrap();
    assert_eq!(model.call_count(), 3);
}
