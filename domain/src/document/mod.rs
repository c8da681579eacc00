//! Document description entities and refinement history

pub mod entities;

pub use entities::{DocumentKind, DocumentSpec, RefinementRecord, SectionSpec};
