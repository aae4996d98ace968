use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Inference endpoint settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inference: InferenceConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, creating a default one if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            let config = Config::default();
            config.save(&path)?;
            Ok(config)
        }
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        self.inference.validate()
    }
}

/// Inference endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InferenceConfig {
    /// Serving endpoint base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API token for the serving endpoint (optional)
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    ///
    /// Covers the whole inference call, including the first-use wait while
    /// the endpoint loads model weights.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum output length in tokens for translation models
    #[serde(default = "default_translation_max_length")]
    pub translation_max_length: u32,

    /// Maximum number of new tokens for explanation/feedback generation
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    /// Sampling temperature for explanation/feedback generation (0.0 to 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Block on first use until the model weights are loaded
    #[serde(default = "default_true")]
    pub wait_for_model: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            translation_max_length: default_translation_max_length(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            wait_for_model: true,
        }
    }
}

impl InferenceConfig {
    /// Validate the inference settings
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(self.endpoint.trim())
            .map_err(|e| anyhow!("Invalid inference endpoint '{}': {}", self.endpoint, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow!(
                "Inference endpoint must be http or https: {}",
                self.endpoint
            ));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow!("Inference timeout must be greater than zero"));
        }

        if self.translation_max_length == 0 {
            return Err(anyhow!("translation_max_length must be greater than zero"));
        }

        if self.max_new_tokens == 0 {
            return Err(anyhow!("max_new_tokens must be greater than zero"));
        }

        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(anyhow!(
                "Temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            ));
        }

        Ok(())
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The corresponding log crate level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_translation_max_length() -> u32 {
    512
}

fn default_max_new_tokens() -> u32 {
    320
}

fn default_temperature() -> f32 {
    0.4
}

fn default_true() -> bool {
    true
}
