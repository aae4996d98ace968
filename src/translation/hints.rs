/*!
 * Tone/domain hint construction for translation model input.
 *
 * MarianMT models are not instruction-tuned, so the hint is stuffed into
 * the input text itself. It is advisory only; the models treat it as part
 * of the text to translate.
 */

use crate::language_utils::Language;
use crate::translation::{Domain, Tone};

/// Build the bracketed style hint for the given tone and domain
///
/// Returns `None` when both are at their defaults: Neutral contributes no
/// tone hint and General contributes no domain hint.
pub fn style_hint(tone: Tone, domain: Domain, target: Language) -> Option<String> {
    let mut hints = Vec::new();
    if domain != Domain::General {
        hints.push(format!("{} context", domain.display_name()));
    }
    if tone != Tone::Neutral {
        hints.push(format!("{} tone", tone.display_name()));
    }

    if hints.is_empty() {
        return None;
    }

    Some(format!("[{} in {}]", hints.join(", "), target.name()))
}

/// Prepend the style hint to the source text
///
/// The hint always precedes the text. With default tone and domain the
/// text passes through unchanged.
pub fn apply_style_hints(text: &str, tone: Tone, domain: Domain, target: Language) -> String {
    match style_hint(tone, domain, target) {
        Some(hint) => format!("{} {}", hint, text),
        None => text.to_string(),
    }
}
