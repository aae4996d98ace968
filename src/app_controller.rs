use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::app_config::Config;
use crate::language_utils::{Language, LanguagePair};
use crate::registry::{self, FEEDBACK_MODEL, ModelRegistry};
use crate::translation::{
    BackTranslationChecker, Domain, Tone, TranslationRequest, Translator,
};
use crate::tutor::{Explainer, FeedbackGenerator};

// @module: Application controller binding the UI surface to the core components

/// Main application controller for the translation studio
///
/// Owns the shared registry and the four components, and applies the UI-level
/// conveniences: same-language passthrough and friendly messages for missing
/// input. Every method maps to one user interaction.
pub struct Controller {
    // @field: App configuration
    config: Config,
    translator: Translator,
    checker: BackTranslationChecker,
    explainer: Explainer,
    feedback: FeedbackGenerator,
}

impl Controller {
    // @method: Create a controller with endpoint-backed models
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let registry = Arc::new(ModelRegistry::with_endpoint(config.inference.clone()));
        Self::with_registry(config, registry)
    }

    /// Create a controller over an existing registry
    ///
    /// Tests inject a registry backed by mock loaders here.
    pub fn with_registry(config: Config, registry: Arc<ModelRegistry>) -> Result<Self> {
        let translator = Translator::new(Arc::clone(&registry));
        Ok(Self {
            config,
            checker: BackTranslationChecker::new(translator.clone()),
            explainer: Explainer::new(Arc::clone(&registry)),
            feedback: FeedbackGenerator::new(registry),
            translator,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate text for the UI
    ///
    /// Same source and target is a trivial passthrough; empty input gets a
    /// friendly message instead of an error. Everything else goes through
    /// the translator.
    pub async fn translate_text(
        &self,
        text: &str,
        source: Language,
        target: Language,
        tone: Tone,
        domain: Domain,
    ) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Ok("Please enter some text to translate.".to_string());
        }

        if source == target {
            debug!("Source and target are both {}, echoing input", source);
            return Ok(text.to_string());
        }

        let pair = LanguagePair::new(source, target)?;
        let request = TranslationRequest::new(text, pair)
            .with_tone(tone)
            .with_domain(domain);

        let spinner = inference_spinner(&format!("Translating {} ...", pair));
        let result = self.translator.translate(&request).await;
        spinner.finish_and_clear();

        let translation = result?;
        info!("Translated {} chars ({})", text.len(), pair);
        Ok(translation.output_text)
    }

    /// Run a round-trip check for the UI
    ///
    /// Returns the forward and backward texts for side-by-side display.
    pub async fn back_translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
        tone: Tone,
        domain: Domain,
    ) -> Result<(String, String)> {
        let text = text.trim();
        if text.is_empty() {
            let message = "Please enter some text to translate.".to_string();
            return Ok((message, String::new()));
        }

        if source == target {
            return Ok((text.to_string(), text.to_string()));
        }

        let pair = LanguagePair::new(source, target)?;
        let request = TranslationRequest::new(text, pair)
            .with_tone(tone)
            .with_domain(domain);

        let spinner = inference_spinner(&format!("Round-tripping {} ...", pair));
        let result = self.checker.check(&request).await;
        spinner.finish_and_clear();

        let round_trip = result?;
        info!("Round trip complete ({})", pair);
        Ok((round_trip.forward.output_text, round_trip.backward.output_text))
    }

    /// Explain a translation for the UI
    pub async fn explain_translation(
        &self,
        original_text: &str,
        translated_text: &str,
        tone: Tone,
        domain: Domain,
    ) -> Result<String> {
        let original_text = original_text.trim();
        let translated_text = translated_text.trim();
        if original_text.is_empty() || translated_text.is_empty() {
            return Ok(
                "Provide both the original text and the translation to get an explanation."
                    .to_string(),
            );
        }

        let spinner = inference_spinner("Asking the teacher model ...");
        let result = self
            .explainer
            .explain(original_text, translated_text, tone, domain)
            .await;
        spinner.finish_and_clear();

        Ok(result?)
    }

    /// Give feedback on a learner's translation attempt
    ///
    /// Obtains the reference translation itself (neutral tone, general
    /// domain) before handing everything to the feedback generator, and
    /// shows the reference alongside the feedback.
    pub async fn learning_mode_feedback(
        &self,
        source_text: &str,
        user_translation: &str,
        source: Language,
        target: Language,
    ) -> Result<String> {
        let source_text = source_text.trim();
        let user_translation = user_translation.trim();
        if source_text.is_empty() || user_translation.is_empty() {
            return Ok("Please provide both the original text and your translation.".to_string());
        }

        let reference = self
            .translate_text(source_text, source, target, Tone::Neutral, Domain::General)
            .await?;

        let spinner = inference_spinner("Asking the teacher model ...");
        let result = self
            .feedback
            .give_feedback(source_text, user_translation, &reference)
            .await;
        spinner.finish_and_clear();

        let feedback = result?;
        Ok(format!(
            "Model translation:\n\n{}\n\n---\n\nFeedback:\n\n{}",
            reference, feedback
        ))
    }

    /// Enumerate the supported translation directions and their models
    pub fn list_models(&self) -> Vec<(LanguagePair, &'static str)> {
        registry::supported_pairs()
            .into_iter()
            .map(|pair| {
                let identifier = registry::language_pair_to_identifier(&pair)
                    .expect("supported pair must have an identifier");
                (pair, identifier)
            })
            .collect()
    }

    /// Identifier of the explanation/feedback model
    pub fn feedback_model(&self) -> &'static str {
        FEEDBACK_MODEL
    }
}

/// Spinner shown while an inference call is in flight
fn inference_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
