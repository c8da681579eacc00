//! Backend provider adapters

pub mod openai;

pub use openai::OpenAiBackend;
