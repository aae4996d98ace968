use std::sync::Arc;

use log::debug;

use crate::errors::TranslationError;
use crate::registry::{FEEDBACK_MODEL, ModelRegistry};
use crate::translation::{Domain, Tone};
use crate::tutor::prompts;

/// Commentary generator for finished translations
///
/// Embeds the original text, the translation, and the requested tone/domain
/// into a teaching prompt and runs it through the feedback model.
#[derive(Clone)]
pub struct Explainer {
    /// Shared model registry
    registry: Arc<ModelRegistry>,
}

impl Explainer {
    /// Create an explainer over the given registry
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Explain a translation in learner terms
    ///
    /// One inference call against the feedback model; the decoded commentary
    /// is returned verbatim apart from whitespace trimming.
    pub async fn explain(
        &self,
        original_text: &str,
        translated_text: &str,
        tone: Tone,
        domain: Domain,
    ) -> Result<String, TranslationError> {
        let model = self.registry.resolve(FEEDBACK_MODEL)?;
        let prompt = prompts::explanation_prompt(original_text, translated_text, tone, domain);

        debug!("Requesting explanation via {}", FEEDBACK_MODEL);

        let output = model.infer(&prompt).await?;
        Ok(output.trim().to_string())
    }
}
