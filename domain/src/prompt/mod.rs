//! Prompt construction for the drafting flows

pub mod template;

pub use template::PromptTemplate;
