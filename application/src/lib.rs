//! Application layer for draftsmith
//!
//! This crate contains the generation orchestrator, the model invoker with
//! its tier-fallback policy, and the port definitions the infrastructure
//! layer implements. It depends only on the domain layer.

pub mod config;
pub mod invoker;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use invoker::{ModelInvoker, DISABLED_MESSAGE, FAILURE_MESSAGE, REFINE_DISABLED_MESSAGE};
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    text_backend::{BackendError, CompletionRequest, TextBackend},
};
pub use use_cases::orchestrator::GenerationOrchestrator;
