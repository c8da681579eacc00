//! Domain layer for draftsmith
//!
//! This crate contains the core business logic, entities, and value objects
//! for AI-assisted document drafting. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Documents
//!
//! A document is described by a [`DocumentSpec`] (topic + kind) and an
//! ordered set of [`SectionSpec`]s. Content for each section is produced
//! one section at a time, with a [`GenerationContext`] carrying forward a
//! running summary of earlier sections so later ones can build on them.
//!
//! ## Tiers
//!
//! Model calls fall through an ordered [`ModelTiers`] ladder: the primary
//! model is tried first, cheaper fallbacks after, each with its own default
//! generation parameters.

pub mod core;
pub mod document;
pub mod generation;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use crate::core::{error::DomainError, model::Model};
pub use document::entities::{DocumentKind, DocumentSpec, RefinementRecord, SectionSpec};
pub use generation::{
    context::GenerationContext,
    parsing::{normalize_content, parse_outline},
    tier::{ModelTier, ModelTiers},
};
pub use prompt::PromptTemplate;
pub use util::truncate_str;
