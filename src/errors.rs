/*!
 * Error types for the polyglotlab application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

use crate::language_utils::Language;

/// Errors that can occur when calling a model-serving endpoint
#[derive(Error, Debug)]
pub enum InferenceError {
    /// Error when sending the inference request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing the endpoint response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the serving API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// The model produced no output at all
    #[error("Model returned an empty response")]
    EmptyResponse,
}

/// Errors that can occur during translation, explanation, or feedback
#[derive(Error, Debug)]
pub enum TranslationError {
    /// No direct translation model exists for the requested pair
    #[error("No translation model for language pair: {source_lang} -> {target}")]
    UnsupportedPair {
        /// Requested source language
        source_lang: Language,
        /// Requested target language
        target: Language,
    },

    /// Loading the model behind an identifier failed
    #[error("Failed to load model '{identifier}': {reason}")]
    ModelLoad {
        /// Model identifier that failed to load
        identifier: String,
        /// Human-readable load failure reason
        reason: String,
    },

    /// The model call itself failed at runtime
    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    /// The text to translate was empty after trimming
    #[error("Text to translate is empty")]
    EmptyText,

    /// Source and target language must differ
    #[error("Source and target language are both {0}")]
    SameLanguage(Language),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the translation core
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
