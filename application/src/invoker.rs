//! Model invoker with tier fallback.
//!
//! [`ModelInvoker`] wraps a single completion call in the multi-tier
//! fallback policy: tiers are tried in strict priority order, and the
//! result is always a string. Backend failures never cross this boundary
//! as errors; total exhaustion yields a fixed sentinel.
//!
//! The invoker has exactly two lifetime states, decided once at
//! construction: *enabled* (attempts backend calls, may fall through
//! tiers) and *disabled* (short-circuits every call without touching the
//! network). There is no transition between them.

use crate::config::GenerationParams;
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::text_backend::{CompletionRequest, TextBackend};
use draftsmith_domain::{truncate_str, ModelTiers};
use std::sync::Arc;
use tracing::{debug, warn};

/// Returned for every call on a disabled invoker.
pub const DISABLED_MESSAGE: &str =
    "AI generation is disabled. Please configure a valid backend API key.";

/// Stored as a refined section's new content when the invoker is disabled.
pub const REFINE_DISABLED_MESSAGE: &str = "AI refinement is disabled.";

/// Returned when every tier has failed.
pub const FAILURE_MESSAGE: &str = "Error generating content";

/// Outcome of one tier attempt.
///
/// Fallback is an explicit loop inspecting this tag; an attempt counts as
/// failed on a backend error or on blank output.
enum Attempt {
    Success(String),
    Failure(String),
}

/// Wraps completion calls in the tier-fallback policy.
pub struct ModelInvoker {
    backend: Option<Arc<dyn TextBackend>>,
    tiers: ModelTiers,
    logger: Arc<dyn GenerationLogger>,
}

impl ModelInvoker {
    /// Create an enabled invoker backed by the given adapter.
    pub fn new(backend: Arc<dyn TextBackend>, tiers: ModelTiers) -> Self {
        Self {
            backend: Some(backend),
            tiers,
            logger: Arc::new(NoGenerationLogger),
        }
    }

    /// Create a permanently disabled invoker (backend not configured).
    pub fn disabled(tiers: ModelTiers) -> Self {
        Self {
            backend: None,
            tiers,
            logger: Arc::new(NoGenerationLogger),
        }
    }

    /// Attach a structured event logger.
    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Whether this invoker will attempt backend calls at all.
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// The configured tier ladder.
    pub fn tiers(&self) -> &ModelTiers {
        &self.tiers
    }

    /// Run one completion through the tier ladder.
    ///
    /// Each tier is attempted with its own default parameters unless the
    /// caller override is set, in which case the override applies to every
    /// tier. Always returns a string: generated text, [`DISABLED_MESSAGE`],
    /// or [`FAILURE_MESSAGE`].
    pub async fn invoke(&self, system: &str, user: &str, overrides: &GenerationParams) -> String {
        let Some(backend) = &self.backend else {
            debug!("Invoker disabled; skipping backend call");
            return DISABLED_MESSAGE.to_string();
        };

        for (rank, tier) in self.tiers.iter().enumerate() {
            let request = CompletionRequest {
                model: tier.model.clone(),
                system: system.to_string(),
                user: user.to_string(),
                temperature: overrides.temperature.unwrap_or(tier.temperature),
                max_output_tokens: overrides.max_output_tokens.unwrap_or(tier.max_output_tokens),
            };
            let model = request.model.clone();

            match Self::attempt(backend.as_ref(), request).await {
                Attempt::Success(text) => {
                    debug!(
                        "Tier {} ({}) succeeded: {} bytes",
                        rank,
                        model,
                        text.len()
                    );
                    return text;
                }
                Attempt::Failure(reason) => {
                    warn!("Tier {} ({}) failed: {}", rank, model, reason);
                    self.logger.log(GenerationEvent::new(
                        "tier_fallback",
                        serde_json::json!({
                            "tier": rank,
                            "model": model.to_string(),
                            "reason": reason,
                            "prompt_preview": truncate_str(user, 120),
                        }),
                    ));
                }
            }
        }

        warn!("All {} tiers exhausted", self.tiers.len());
        FAILURE_MESSAGE.to_string()
    }

    async fn attempt(backend: &dyn TextBackend, request: CompletionRequest) -> Attempt {
        match backend.complete(request).await {
            Ok(text) if text.trim().is_empty() => {
                Attempt::Failure("blank response".to_string())
            }
            Ok(text) => Attempt::Success(text),
            Err(e) => Attempt::Failure(e.to_string()),
        }
    }
}
