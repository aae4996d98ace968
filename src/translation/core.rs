/*!
 * Core translator implementation.
 *
 * This module contains the Translator, which is responsible for turning one
 * TranslationRequest into target-language text via the model registry.
 */

use std::sync::Arc;

use log::debug;

use crate::errors::TranslationError;
use crate::registry::{self, ModelRegistry};
use crate::translation::hints;
use crate::translation::{TranslationRequest, TranslationResult};

/// Translator producing one target-language text per request
///
/// Stateless apart from the shared registry handle; every call is a single
/// synchronous chain of resolve, hint construction, and one inference call.
/// Failures propagate to the caller unchanged, with no retry.
#[derive(Clone)]
pub struct Translator {
    /// Shared model registry
    registry: Arc<ModelRegistry>,
}

impl Translator {
    /// Create a translator over the given registry
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Translate one request
    ///
    /// The model input is the request text with the tone/domain hint
    /// prepended when one applies. The decoded output is returned verbatim
    /// apart from whitespace trimming.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        if request.text.trim().is_empty() {
            return Err(TranslationError::EmptyText);
        }

        let identifier = registry::language_pair_to_identifier(&request.pair)?;
        let model = self.registry.resolve(identifier)?;

        let input = hints::apply_style_hints(
            &request.text,
            request.tone,
            request.domain,
            request.pair.target,
        );

        debug!(
            "Translating {} chars via {} ({})",
            input.len(),
            identifier,
            request.pair
        );

        let output = model.infer(&input).await?;

        Ok(TranslationResult {
            output_text: normalize_whitespace(&output),
        })
    }
}

/// Trim surrounding whitespace from decoded model output
fn normalize_whitespace(text: &str) -> String {
    text.trim().to_string()
}
