/*!
 * Model boundary for the pretrained models used by the application.
 *
 * Every pretrained model, whether a MarianMT translation direction or the
 * instruction-tuned feedback model, is reached through the same capability
 * interface: text in, decoded text out. Concrete implementations are HTTP
 * clients against a model-serving endpoint:
 * - `marian`: MarianMT-class translation models
 * - `instruct`: the instruction-tuned text2text model
 * - `mock`: scripted models for the test suite
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::InferenceError;

/// Capability interface over one loaded pretrained model
///
/// Implementations are shared behind `Arc<dyn Model>` by the registry and
/// must be safe to call from concurrent tasks. A single `infer` call maps
/// one input text to one decoded output text; it performs no retries.
#[async_trait]
pub trait Model: Send + Sync + Debug {
    /// Identifier this model instance was loaded from
    fn identifier(&self) -> &str;

    /// Run one inference call with the given input text
    ///
    /// # Returns
    /// * `Result<String, InferenceError>` - The decoded output text or an error
    async fn infer(&self, input: &str) -> Result<String, InferenceError>;
}

pub mod instruct;
pub mod marian;
pub mod mock;
