//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types on
//! demand.

use draftsmith_domain::{Model, ModelTier, ModelTiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("tier model name cannot be empty")]
    EmptyModelName,
}

/// Raw backend configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// API key; also read from the `OPENAI_API_KEY` environment variable.
    pub api_key: Option<String>,
    /// Base URL for an OpenAI-compatible endpoint.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// One fallback tier from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTierConfig {
    /// Model name as a string
    pub model: String,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path for the JSONL generation-event log; unset disables it.
    pub generation_log: Option<String>,
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: FileBackendConfig,
    /// Fallback ladder, highest priority first; empty uses built-in defaults.
    pub tiers: Vec<FileTierConfig>,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate cross-field constraints not expressible in serde.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.tiers.iter().any(|t| t.model.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyModelName);
        }
        Ok(())
    }

    /// The API key: config value first, `OPENAI_API_KEY` as fallback.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.backend
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }

    /// Convert the configured tier list into the domain ladder.
    ///
    /// An empty list falls back to the built-in GPT-4 → GPT-3.5 ladder.
    pub fn model_tiers(&self) -> Result<ModelTiers, ConfigValidationError> {
        if self.tiers.is_empty() {
            return Ok(ModelTiers::default());
        }

        let tiers = self
            .tiers
            .iter()
            .map(|t| {
                if t.model.trim().is_empty() {
                    return Err(ConfigValidationError::EmptyModelName);
                }
                let model: Model = t.model.parse().unwrap();
                Ok(ModelTier::new(
                    model,
                    t.temperature.unwrap_or(0.7),
                    t.max_output_tokens.unwrap_or(800),
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Non-empty by the check above, so this cannot fail
        Ok(ModelTiers::new(tiers).unwrap())
    }
}
