/*!
 * Learner-facing commentary built on the instruction-tuned feedback model.
 *
 * Both components resolve the same fixed feedback model through the registry
 * and make one inference call per request:
 *
 * - `explainer`: Commentary on a finished translation
 * - `feedback`: Corrections and suggestions for a learner's own attempt
 * - `prompts`: Prompt templates for both
 */

// Re-export main types for easier usage
pub use self::explainer::Explainer;
pub use self::feedback::FeedbackGenerator;
pub use self::prompts::PromptTemplate;

// Submodules
pub mod explainer;
pub mod feedback;
pub mod prompts;
