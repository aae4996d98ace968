/*!
 * Model registry: identifier lookup and the process-wide model cache.
 *
 * The registry owns the only shared mutable state in the application. It
 * maps language pairs to translation-model identifiers, knows the fixed
 * identifier of the explanation/feedback model, and lazily resolves each
 * identifier to one loaded model instance that lives for the rest of the
 * process. Loading goes through the `ModelLoader` seam so tests can
 * substitute mock models.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use url::Url;

use crate::app_config::InferenceConfig;
use crate::errors::TranslationError;
use crate::language_utils::{Language, LanguagePair};
use crate::models::Model;
use crate::models::instruct::InstructEndpoint;
use crate::models::marian::MarianEndpoint;

/// Identifier of the instruction-tuned model used for explanations and feedback
pub const FEEDBACK_MODEL: &str = "google/flan-t5-small";

/// The eight direct translation directions shipped with the application
///
/// Only direct English<->X models exist; anything else is unsupported and
/// must fail explicitly rather than pivot through a third language.
const TRANSLATION_MODELS: [(Language, Language, &str); 8] = [
    (Language::English, Language::French, "Helsinki-NLP/opus-mt-en-fr"),
    (Language::French, Language::English, "Helsinki-NLP/opus-mt-fr-en"),
    (Language::English, Language::German, "Helsinki-NLP/opus-mt-en-de"),
    (Language::German, Language::English, "Helsinki-NLP/opus-mt-de-en"),
    (Language::English, Language::Spanish, "Helsinki-NLP/opus-mt-en-es"),
    (Language::Spanish, Language::English, "Helsinki-NLP/opus-mt-es-en"),
    (Language::English, Language::Swedish, "Helsinki-NLP/opus-mt-en-sv"),
    (Language::Swedish, Language::English, "Helsinki-NLP/opus-mt-sv-en"),
];

/// Pair-to-identifier lookup built from the direction table
static MODEL_MAP: Lazy<HashMap<(Language, Language), &'static str>> = Lazy::new(|| {
    TRANSLATION_MODELS
        .iter()
        .map(|(source, target, identifier)| ((*source, *target), *identifier))
        .collect()
});

/// Look up the translation-model identifier for a language pair
pub fn language_pair_to_identifier(pair: &LanguagePair) -> Result<&'static str, TranslationError> {
    MODEL_MAP
        .get(&(pair.source, pair.target))
        .copied()
        .ok_or(TranslationError::UnsupportedPair {
            source_lang: pair.source,
            target: pair.target,
        })
}

/// All supported translation directions, in table order
pub fn supported_pairs() -> Vec<LanguagePair> {
    TRANSLATION_MODELS
        .iter()
        .map(|(source, target, _)| LanguagePair {
            source: *source,
            target: *target,
        })
        .collect()
}

/// Whether the identifier names one of the bundled translation models
pub fn is_translation_identifier(identifier: &str) -> bool {
    TRANSLATION_MODELS.iter().any(|(_, _, id)| *id == identifier)
}

/// Trait for loading a model instance from its identifier
///
/// The registry calls this exactly once per identifier per process lifetime
/// (on the first resolve); implementations do not need to cache.
pub trait ModelLoader: Send + Sync {
    /// Load the model behind the given identifier
    fn load(&self, identifier: &str) -> Result<Arc<dyn Model>, TranslationError>;
}

/// Loader building HTTP endpoint clients from the inference configuration
pub struct EndpointModelLoader {
    /// Inference endpoint settings
    config: InferenceConfig,
}

impl EndpointModelLoader {
    /// Create a loader for the given inference configuration
    pub fn new(config: InferenceConfig) -> Self {
        Self { config }
    }
}

impl ModelLoader for EndpointModelLoader {
    fn load(&self, identifier: &str) -> Result<Arc<dyn Model>, TranslationError> {
        let endpoint = self.config.endpoint.trim();
        Url::parse(endpoint).map_err(|e| TranslationError::ModelLoad {
            identifier: identifier.to_string(),
            reason: format!("Invalid endpoint URL '{}': {}", endpoint, e),
        })?;

        if is_translation_identifier(identifier) {
            Ok(Arc::new(MarianEndpoint::new(
                identifier,
                endpoint,
                self.config.api_key.clone(),
                self.config.timeout_secs,
                self.config.translation_max_length,
                self.config.wait_for_model,
            )))
        } else if identifier == FEEDBACK_MODEL {
            Ok(Arc::new(InstructEndpoint::new(
                identifier,
                endpoint,
                self.config.api_key.clone(),
                self.config.timeout_secs,
                self.config.max_new_tokens,
                self.config.temperature,
                self.config.wait_for_model,
            )))
        } else {
            Err(TranslationError::ModelLoad {
                identifier: identifier.to_string(),
                reason: "Unknown model identifier".to_string(),
            })
        }
    }
}

/// Process-wide registry of loaded models
///
/// Resolution is lazy: the first request for an identifier loads the model
/// and caches the shared handle; later requests return the cached instance.
/// Nothing is ever evicted; the cache is bounded by the fixed identifier set.
pub struct ModelRegistry {
    /// Loader invoked on the first resolve of each identifier
    loader: Box<dyn ModelLoader>,

    /// Loaded models by identifier
    cache: Mutex<HashMap<String, Arc<dyn Model>>>,
}

impl ModelRegistry {
    /// Create a registry using the given loader
    pub fn new(loader: Box<dyn ModelLoader>) -> Self {
        Self {
            loader,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Create a registry backed by HTTP endpoint clients
    pub fn with_endpoint(config: InferenceConfig) -> Self {
        Self::new(Box::new(EndpointModelLoader::new(config)))
    }

    /// Resolve an identifier to its loaded model, loading on first use
    ///
    /// The cache lock is held across the load, so concurrent first access to
    /// the same identifier blocks until the load finishes and then shares the
    /// one instance. Failed loads are not cached.
    pub fn resolve(&self, identifier: &str) -> Result<Arc<dyn Model>, TranslationError> {
        let mut cache = self.cache.lock();

        if let Some(model) = cache.get(identifier) {
            debug!("Model cache hit for {}", identifier);
            return Ok(Arc::clone(model));
        }

        debug!("Model cache miss for {}, loading", identifier);
        let model = self.loader.load(identifier)?;
        cache.insert(identifier.to_string(), Arc::clone(&model));
        Ok(model)
    }

    /// Whether the identifier has already been loaded
    pub fn is_loaded(&self, identifier: &str) -> bool {
        self.cache.lock().contains_key(identifier)
    }

    /// Number of models loaded so far
    pub fn loaded_count(&self) -> usize {
        self.cache.lock().len()
    }
}
