//! Model tier ladder for fallback.
//!
//! [`ModelTiers`] is the ordered list of candidate models a generation
//! call falls through. This is a static value object — once created, the
//! ladder doesn't change at runtime.

use crate::core::error::DomainError;
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// One candidate model configuration in the fallback priority list.
///
/// Each tier carries its own default generation parameters, used whenever
/// the caller doesn't override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTier {
    pub model: Model,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl ModelTier {
    pub fn new(model: Model, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            model,
            temperature,
            max_output_tokens,
        }
    }
}

/// Ordered, non-empty fallback ladder.
///
/// Tiers are tried in strict priority order: tier N+1 is only attempted
/// after tier N's failure has been observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTiers(Vec<ModelTier>);

impl ModelTiers {
    /// Build a ladder from an explicit list. An empty list is rejected —
    /// a ladder with no rungs could never produce content.
    pub fn new(tiers: Vec<ModelTier>) -> Result<Self, DomainError> {
        if tiers.is_empty() {
            return Err(DomainError::NoTiers);
        }
        Ok(Self(tiers))
    }

    /// The primary tier, then cheaper fallbacks, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelTier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: emptiness is rejected at construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The highest-priority tier.
    pub fn primary(&self) -> &ModelTier {
        &self.0[0]
    }
}

impl Default for ModelTiers {
    /// GPT-4 first, GPT-3.5 as the cheaper fallback.
    fn default() -> Self {
        Self(vec![
            ModelTier::new(Model::Gpt4, 0.7, 800),
            ModelTier::new(Model::Gpt35Turbo, 0.7, 600),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ladder_rejected() {
        let result = ModelTiers::new(vec![]);
        assert!(matches!(result, Err(DomainError::NoTiers)));
    }

    #[test]
    fn test_default_ladder_order() {
        let tiers = ModelTiers::default();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers.primary().model, Model::Gpt4);
        let models: Vec<_> = tiers.iter().map(|t| t.model.clone()).collect();
        assert_eq!(models, vec![Model::Gpt4, Model::Gpt35Turbo]);
    }

    #[test]
    fn test_single_tier_ladder() {
        let tiers = ModelTiers::new(vec![ModelTier::new(Model::Gpt4oMini, 0.5, 400)]).unwrap();
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers.primary().max_output_tokens, 400);
    }
}
