//! Per-call generation parameter overrides.
//!
//! [`GenerationParams`] layers caller-specified parameters over each
//! tier's own defaults: a field left `None` means "use the tier's
//! default". When a field is set, it applies to every tier attempted
//! during that call, including fallbacks.

use serde::{Deserialize, Serialize};

/// Optional overrides for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Sampling temperature; `None` uses the tier default.
    pub temperature: Option<f32>,
    /// Maximum output length in tokens; `None` uses the tier default.
    pub max_output_tokens: Option<u32>,
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_overrides_nothing() {
        let params = GenerationParams::default();
        assert!(params.temperature.is_none());
        assert!(params.max_output_tokens.is_none());
    }

    #[test]
    fn test_builder() {
        let params = GenerationParams::default()
            .with_temperature(0.8)
            .with_max_output_tokens(300);
        assert_eq!(params.temperature, Some(0.8));
        assert_eq!(params.max_output_tokens, Some(300));
    }
}
