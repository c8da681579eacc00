//! Ports: interfaces implemented by the infrastructure layer

pub mod generation_logger;
pub mod text_backend;
