/*!
 * Tests for error types and their user-facing messages
 */

use polyglotlab::errors::{AppError, InferenceError, TranslationError};
use polyglotlab::language_utils::Language;

/// Test the unsupported-pair message names both languages
#[test]
fn test_unsupportedPair_display_shouldNameBothLanguages() {
    let error = TranslationError::UnsupportedPair {
        source_lang: Language::French,
        target: Language::German,
    };

    assert_eq!(
        error.to_string(),
        "No translation model for language pair: French -> German"
    );
}

/// Test the model-load message carries the identifier
#[test]
fn test_modelLoad_display_shouldCarryIdentifier() {
    let error = TranslationError::ModelLoad {
        identifier: "Helsinki-NLP/opus-mt-en-fr".to_string(),
        reason: "connection refused".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("Helsinki-NLP/opus-mt-en-fr"));
    assert!(message.contains("connection refused"));
}

/// Test inference errors convert into translation errors
#[test]
fn test_inferenceError_shouldConvertIntoTranslationError() {
    let inference = InferenceError::ApiError {
        status_code: 503,
        message: "model loading".to_string(),
    };

    let error: TranslationError = inference.into();
    let message = error.to_string();
    assert!(message.starts_with("Inference error:"));
    assert!(message.contains("503"));
}

/// Test translation errors convert into app errors
#[test]
fn test_translationError_shouldConvertIntoAppError() {
    let error: AppError = TranslationError::EmptyText.into();
    assert_eq!(
        error.to_string(),
        "Translation error: Text to translate is empty"
    );
}

/// Test anyhow errors fold into the unknown variant
#[test]
fn test_anyhowError_shouldConvertIntoUnknown() {
    let error: AppError = anyhow::anyhow!("something odd").into();
    assert_eq!(error.to_string(), "Unknown error: something odd");
}
