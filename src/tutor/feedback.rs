use std::sync::Arc;

use log::debug;

use crate::errors::TranslationError;
use crate::registry::{FEEDBACK_MODEL, ModelRegistry};
use crate::tutor::prompts;

/// Feedback generator for learner translation attempts
///
/// Compares the learner's attempt to a reference translation supplied by
/// the caller. This component never calls the translator itself; obtaining
/// the reference is the caller's job.
#[derive(Clone)]
pub struct FeedbackGenerator {
    /// Shared model registry
    registry: Arc<ModelRegistry>,
}

impl FeedbackGenerator {
    /// Create a feedback generator over the given registry
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Generate corrections, suggestions, and encouragement
    ///
    /// One inference call against the feedback model; the decoded feedback
    /// is returned verbatim apart from whitespace trimming.
    pub async fn give_feedback(
        &self,
        source_text: &str,
        user_translation: &str,
        reference_translation: &str,
    ) -> Result<String, TranslationError> {
        let model = self.registry.resolve(FEEDBACK_MODEL)?;
        let prompt =
            prompts::feedback_prompt(source_text, user_translation, reference_translation);

        debug!("Requesting learner feedback via {}", FEEDBACK_MODEL);

        let output = model.infer(&prompt).await?;
        Ok(output.trim().to_string())
    }
}
