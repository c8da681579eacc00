//! Infrastructure layer for draftsmith
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileBackendConfig, FileConfig, FileLoggingConfig, FileTierConfig};
pub use logging::JsonlGenerationLogger;
pub use providers::OpenAiBackend;
