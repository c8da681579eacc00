//! Text-generation backend port
//!
//! Defines the single outbound capability the drafting core needs: one
//! completion call against one named model. Implementations (adapters)
//! live in the infrastructure layer. Only the
//! [`ModelInvoker`](crate::invoker::ModelInvoker) calls this port and
//! interprets its failures.

use async_trait::async_trait;
use draftsmith_domain::Model;
use thiserror::Error;

/// Errors a backend call can fail with.
///
/// The taxonomy exists for logging and tests; every variant triggers the
/// same recovery (advance to the next tier).
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Backend returned no content")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

/// One completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: Model,
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Port for a text-generation backend.
///
/// A call either yields the generated text or a [`BackendError`]; there
/// is no session state between calls.
#[async_trait]
pub trait TextBackend: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, BackendError>;
}
