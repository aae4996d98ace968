/*!
 * # PolyglotLab - Smart Translator & Learning Studio
 *
 * A Rust library for tone- and domain-aware translation with learner feedback,
 * built on pretrained models reached through a model-serving endpoint.
 *
 * ## Features
 *
 * - Direct translation between English and French, German, Spanish, Swedish
 *   using MarianMT-class models
 * - Tone hints (neutral, formal, informal, simplified) and domain hints
 *   (general, business, technical, casual) stuffed into the model input
 * - Back-translation checks for meaning preservation
 * - Translation explanations and learner feedback from an instruction-tuned
 *   text2text model
 * - Lazy process-wide model cache, one instance per identifier
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language_utils`: The supported language set and pair handling
 * - `registry`: Pair-to-model mapping and the lazy model cache
 * - `models`: The inference boundary:
 *   - `models::marian`: MarianMT translation endpoint client
 *   - `models::instruct`: Instruction-tuned text2text endpoint client
 *   - `models::mock`: Scripted models for tests
 * - `translation`: Translation orchestration:
 *   - `translation::core`: The translator
 *   - `translation::back_translation`: Round-trip checking
 *   - `translation::hints`: Tone/domain hint construction
 * - `tutor`: Explanations and learner feedback
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod models;
pub mod registry;
pub mod translation;
pub mod tutor;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, InferenceError, TranslationError};
pub use language_utils::{Language, LanguagePair};
pub use registry::{
    FEEDBACK_MODEL, ModelLoader, ModelRegistry, language_pair_to_identifier, supported_pairs,
};
pub use translation::{
    BackTranslationChecker, BackTranslationResult, Domain, Tone, TranslationRequest,
    TranslationResult, Translator,
};
pub use tutor::{Explainer, FeedbackGenerator};
