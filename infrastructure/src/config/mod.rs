//! Configuration loading and file formats

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileBackendConfig, FileConfig, FileLoggingConfig, FileTierConfig,
};
pub use loader::ConfigLoader;
