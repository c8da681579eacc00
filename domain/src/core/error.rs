//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Document has no sections to generate")]
    EmptyDocument,

    #[error("At least one model tier must be configured")]
    NoTiers,

    #[error("Invalid document kind: {0}")]
    InvalidDocumentKind(String),
}
