/*!
 * Mock model implementations for testing.
 *
 * This module provides mock models that simulate different behaviors:
 * - `MockModel::working()` - Always succeeds, echoing the input with a marker
 * - `MockModel::failing()` - Always fails with an API error
 * - `MockModel::empty()` - Returns an empty string
 * - `MockModel::padded()` - Wraps the output in extra whitespace
 *
 * `MockLoader` hands out mock models through the registry's loader seam and
 * counts how often each identifier is actually loaded.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::{InferenceError, TranslationError};
use crate::models::Model;
use crate::registry::ModelLoader;

/// Behavior mode for the mock model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a marked echo of the input
    Working,
    /// Always fails with an API error
    Failing,
    /// Returns an empty string
    Empty,
    /// Returns the working output wrapped in extra whitespace
    Padded,
    /// Simulates a slow response (for timeout testing)
    Slow { delay_ms: u64 },
}

/// Mock model for testing orchestration behavior
#[derive(Debug)]
pub struct MockModel {
    /// Identifier reported by this model
    identifier: String,
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of infer calls made
    call_count: Arc<AtomicUsize>,
    /// Every input passed to infer, in call order
    inputs: Arc<Mutex<Vec<String>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockModel {
    /// Create a new mock model with the specified behavior
    pub fn new(identifier: impl Into<String>, behavior: MockBehavior) -> Self {
        Self {
            identifier: identifier.into(),
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            inputs: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock model that always succeeds
    pub fn working(identifier: impl Into<String>) -> Self {
        Self::new(identifier, MockBehavior::Working)
    }

    /// Create a failing mock model that always errors
    pub fn failing(identifier: impl Into<String>) -> Self {
        Self::new(identifier, MockBehavior::Failing)
    }

    /// Create a mock model that returns empty output
    pub fn empty(identifier: impl Into<String>) -> Self {
        Self::new(identifier, MockBehavior::Empty)
    }

    /// Create a mock model that pads its output with whitespace
    pub fn padded(identifier: impl Into<String>) -> Self {
        Self::new(identifier, MockBehavior::Padded)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of infer calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// All inputs passed to infer, in call order
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().clone()
    }

    /// The most recent input passed to infer
    pub fn last_input(&self) -> Option<String> {
        self.inputs.lock().last().cloned()
    }

    /// The default marked echo for the given input
    fn echo(&self, input: &str) -> String {
        if let Some(generator) = self.custom_response {
            generator(input)
        } else {
            format!("[{}] {}", self.identifier, input)
        }
    }
}

impl Clone for MockModel {
    fn clone(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            behavior: self.behavior,
            call_count: Arc::clone(&self.call_count),
            inputs: Arc::clone(&self.inputs),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl Model for MockModel {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    async fn infer(&self, input: &str) -> Result<String, InferenceError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().push(input.to_string());

        match self.behavior {
            MockBehavior::Working => Ok(self.echo(input)),

            MockBehavior::Failing => Err(InferenceError::ApiError {
                status_code: 500,
                message: "Simulated model failure".to_string(),
            }),

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::Padded => Ok(format!("  {} \n", self.echo(input))),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(self.echo(input))
            }
        }
    }
}

/// Loader handing out mock models, counting actual loads
///
/// Shares call counters and input recorders between the models it creates
/// and the loader itself, so tests can assert on registry-mediated calls
/// without holding on to the concrete model instances.
#[derive(Debug)]
pub struct MockLoader {
    /// Behavior for every loaded model
    behavior: MockBehavior,
    /// Number of load calls made
    load_count: Arc<AtomicUsize>,
    /// Identifiers loaded, in load order
    loaded: Arc<Mutex<Vec<String>>>,
    /// Models handed out, by identifier
    models: Arc<Mutex<Vec<MockModel>>>,
    /// Identifier whose load should fail (optional)
    fail_for: Option<String>,
    /// Artificial load duration in milliseconds
    load_delay_ms: u64,
}

impl MockLoader {
    /// Create a loader producing models with the given behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            load_count: Arc::new(AtomicUsize::new(0)),
            loaded: Arc::new(Mutex::new(Vec::new())),
            models: Arc::new(Mutex::new(Vec::new())),
            fail_for: None,
            load_delay_ms: 0,
        }
    }

    /// Create a loader producing working models
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a loader producing failing models
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Make loads of the given identifier fail
    pub fn with_load_failure(mut self, identifier: impl Into<String>) -> Self {
        self.fail_for = Some(identifier.into());
        self
    }

    /// Make every load take the given time
    pub fn with_load_delay(mut self, delay_ms: u64) -> Self {
        self.load_delay_ms = delay_ms;
        self
    }

    /// Number of load calls made so far
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    /// Identifiers loaded so far, in load order
    pub fn loaded_identifiers(&self) -> Vec<String> {
        self.loaded.lock().clone()
    }

    /// The model handed out for the given identifier, if any
    pub fn model(&self, identifier: &str) -> Option<MockModel> {
        self.models
            .lock()
            .iter()
            .find(|m| m.identifier() == identifier)
            .cloned()
    }
}

impl Clone for MockLoader {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            load_count: Arc::clone(&self.load_count),
            loaded: Arc::clone(&self.loaded),
            models: Arc::clone(&self.models),
            fail_for: self.fail_for.clone(),
            load_delay_ms: self.load_delay_ms,
        }
    }
}

impl ModelLoader for MockLoader {
    fn load(&self, identifier: &str) -> Result<Arc<dyn Model>, TranslationError> {
        if self.load_delay_ms > 0 {
            std::thread::sleep(std::time::Duration::from_millis(self.load_delay_ms));
        }

        self.load_count.fetch_add(1, Ordering::SeqCst);
        self.loaded.lock().push(identifier.to_string());

        if self.fail_for.as_deref() == Some(identifier) {
            return Err(TranslationError::ModelLoad {
                identifier: identifier.to_string(),
                reason: "Simulated load failure".to_string(),
            });
        }

        let model = MockModel::new(identifier, self.behavior);
        self.models.lock().push(model.clone());
        Ok(Arc::new(model))
    }
}
