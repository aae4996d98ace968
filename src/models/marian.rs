use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::InferenceError;
use crate::models::Model;

/// Client for one MarianMT translation direction served over HTTP
///
/// Each instance is bound to a single model identifier (one direction, e.g.
/// `Helsinki-NLP/opus-mt-en-fr`) and talks to a Hugging Face inference-style
/// endpoint: `POST {endpoint}/models/{identifier}` with a JSON `inputs` body.
#[derive(Debug)]
pub struct MarianEndpoint {
    /// HTTP client for API requests
    client: Client,
    /// Model identifier this client is bound to
    identifier: String,
    /// Serving endpoint base URL
    endpoint: String,
    /// API token for authentication (optional)
    api_key: String,
    /// Maximum output length in tokens
    max_length: u32,
    /// Whether the endpoint should block until the weights are loaded
    wait_for_model: bool,
}

/// Request body for a translation inference call
#[derive(Debug, Serialize)]
struct TranslationRequestBody {
    /// Text to translate
    inputs: String,

    /// Generation parameters
    parameters: TranslationParameters,

    /// Serving options
    options: InferenceOptions,
}

/// Generation parameters for a translation call
#[derive(Debug, Serialize)]
struct TranslationParameters {
    /// Maximum output length in tokens
    max_length: u32,
}

/// Serving options for an inference call
#[derive(Debug, Serialize)]
struct InferenceOptions {
    /// Block until the model weights are loaded instead of failing fast
    wait_for_model: bool,
}

/// One translation in the endpoint response array
#[derive(Debug, Deserialize)]
struct TranslationOutput {
    /// The decoded translation
    translation_text: String,
}

impl MarianEndpoint {
    /// Create a new client bound to one translation model identifier
    pub fn new(
        identifier: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
        max_length: u32,
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
            max_length,
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
impl Model for MarianEndpoint {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    async fn infer(&self, input: &str) -> Result<String, InferenceError> {
        let body = TranslationRequestBody {
            inputs: input.to_string(),
            parameters: TranslationParameters {
                max_length: self.max_length,
            },
            options: InferenceOptions {
                wait_for_model: self.wait_for_model,
            },
        };

        debug!("Sending translation request to {}", self.identifier);

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
            error!("Translation API error ({}): {}", status, message);
            return Err(InferenceError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let outputs = response
            .json::<Vec<TranslationOutput>>()
            .await
            .map_err(|e| InferenceError::ParseError(e.to_string()))?;

        outputs
            .into_iter()
            .next()
            .map(|output| output.translation_text)
            .ok_or(InferenceError::EmptyResponse)
    }
}
