/*!
 * Back-translation consistency checking.
 *
 * Translates forward, then feeds the forward output back through the
 * reversed pair so the reader can compare the round trip with the original
 * text. Comparison is left to the reader; nothing is scored.
 */

use crate::errors::TranslationError;
use crate::translation::core::Translator;
use crate::translation::{BackTranslationResult, TranslationRequest};

/// Round-trip checker built on two sequential translator calls
#[derive(Clone)]
pub struct BackTranslationChecker {
    /// Translator used for both directions
    translator: Translator,
}

impl BackTranslationChecker {
    /// Create a checker over the given translator
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Run the round trip for one request
    ///
    /// The backward call strictly follows the forward call: its input is the
    /// forward output and its pair is the exact reverse, with tone and domain
    /// carried through unchanged. Either failure aborts the whole check; no
    /// partial result is returned.
    pub async fn check(
        &self,
        request: &TranslationRequest,
    ) -> Result<BackTranslationResult, TranslationError> {
        let forward = self.translator.translate(request).await?;

        let reversed_request = TranslationRequest {
            text: forward.output_text.clone(),
            pair: request.pair.reversed(),
            tone: request.tone,
            domain: request.domain,
        };
        let backward = self.translator.translate(&reversed_request).await?;

        Ok(BackTranslationResult { forward, backward })
    }
}
