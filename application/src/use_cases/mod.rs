//! Use cases: the operations the request-handling layer calls

pub mod orchestrator;

pub use orchestrator::GenerationOrchestrator;
