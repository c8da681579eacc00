//! Generation value objects: tier ladder, running context, output parsing

pub mod context;
pub mod parsing;
pub mod tier;

pub use context::GenerationContext;
pub use parsing::{normalize_content, parse_outline};
pub use tier::{ModelTier, ModelTiers};
