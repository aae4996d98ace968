/*!
 * Prompt templates for explanation and learner feedback.
 *
 * Wording is presentation, not contract: callers rely on the embedded
 * fields and their order, not the surrounding phrasing.
 */

use crate::translation::{Domain, Tone};

/// Prompt template with placeholder substitution
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Template for explaining a finished translation.
    pub const EXPLANATION: &'static str = "You are a helpful language teacher. \
Explain this translation to a learner in simple terms. \
Mention important word choices, tone, and any interesting grammar.

Requested tone: {tone}
Requested domain: {domain}

Original text:
{original_text}

Translation:
{translated_text}

Explanation (in English, 1-2 short paragraphs):";

    /// Template for feedback on a learner's own translation attempt.
    pub const FEEDBACK: &'static str = "You are a friendly language teacher. \
Compare the student's translation to the reference translation. \
Explain what is good, what could be improved, and give 2-4 concrete suggestions. \
Be encouraging, not harsh.

Original text:
{source_text}

Student's translation:
{user_translation}

Reference translation:
{reference_translation}

Feedback (in English, short and structured):";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the explanation template.
    pub fn explanation() -> Self {
        Self::new(Self::EXPLANATION)
    }

    /// Create the feedback template.
    pub fn feedback() -> Self {
        Self::new(Self::FEEDBACK)
    }

    /// Render the template with the given variables.
    pub fn render(&self, variables: &[(&str, &str)]) -> String {
        let mut rendered = self.template.clone();
        for (name, value) in variables {
            rendered = rendered.replace(&format!("{{{}}}", name), value);
        }
        rendered
    }
}

/// Build the explanation prompt for a finished translation
pub fn explanation_prompt(
    original_text: &str,
    translated_text: &str,
    tone: Tone,
    domain: Domain,
) -> String {
    PromptTemplate::explanation().render(&[
        ("tone", tone.display_name()),
        ("domain", domain.display_name()),
        ("original_text", original_text),
        ("translated_text", translated_text),
    ])
}

/// Build the feedback prompt comparing a learner's attempt to a reference
pub fn feedback_prompt(
    source_text: &str,
    user_translation: &str,
    reference_translation: &str,
) -> String {
    PromptTemplate::feedback().render(&[
        ("source_text", source_text),
        ("user_translation", user_translation),
        ("reference_translation", reference_translation),
    ])
}
