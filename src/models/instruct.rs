use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::InferenceError;
use crate::models::Model;

/// Client for the instruction-tuned text2text model served over HTTP
///
/// Used for explanation and learner-feedback prompts only, never for
/// translation. Same wire shape as the translation endpoint but with
/// text-generation parameters and a `generated_text` response field.
#[derive(Debug)]
pub struct InstructEndpoint {
    /// HTTP client for API requests
    client: Client,
    /// Model identifier this client is bound to
    identifier: String,
    /// Serving endpoint base URL
    endpoint: String,
    /// API token for authentication (optional)
    api_key: String,
    /// Maximum number of new tokens to generate
    max_new_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Whether the endpoint should block until the weights are loaded
    wait_for_model: bool,
}

/// Request body for a text2text generation call
#[derive(Debug, Serialize)]
struct GenerationRequestBody {
    /// Prompt text
    inputs: String,

    /// Generation parameters
    parameters: GenerationParameters,

    /// Serving options
    options: GenerationOptions,
}

/// Generation parameters for a text2text call
#[derive(Debug, Serialize)]
struct GenerationParameters {
    /// Maximum number of new tokens to generate
    max_new_tokens: u32,

    /// Sampling temperature
    temperature: f32,
}

/// Serving options for a generation call
#[derive(Debug, Serialize)]
struct GenerationOptions {
    /// Block until the model weights are loaded instead of failing fast
    wait_for_model: bool,
}

/// One generation in the endpoint response array
#[derive(Debug, Deserialize)]
struct GenerationOutput {
    /// The decoded generation
    generated_text: String,
}

impl InstructEndpoint {
    /// Create a new client bound to the feedback model identifier
    pub fn new(
        identifier: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
        max_new_tokens: u32,
        temperature: f32,
        wait_for_model: bool,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            identifier: identifier.into(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            max_new_tokens,
            temperature,
            wait_for_model,
        }
    }

    /// Full URL of the inference route for this model
    fn api_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.endpoint.trim_end_matches('/'),
            self.identifier
        )
    }
}

#[async_trait]
impl Model for InstructEndpoint {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    async fn infer(&self, input: &str) -> Result<String, InferenceError> {
        let body = GenerationRequestBody {
            inputs: input.to_string(),
            parameters: GenerationParameters {
                max_new_tokens: self.max_new_tokens,
                temperature: self.temperature,
            },
            options: GenerationOptions {
                wait_for_model: self.wait_for_model,
            },
        };

        debug!("Sending generation request to {}", self.identifier);

        let mut request = self
            .client
            .post(self.api_url())
            .header("Content-Type", "application/json")
            .json(&body);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| InferenceError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Generation API error ({}): {}", status, message);
            return Err(InferenceError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let outputs = response
            .json::<Vec<GenerationOutput>>()
            .await
            .map_err(|e| InferenceError::ParseError(e.to_string()))?;

        outputs
            .into_iter()
            .next()
            .map(|output| output.generated_text)
            .ok_or(InferenceError::EmptyResponse)
    }
}
