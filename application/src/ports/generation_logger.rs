//! Port for structured generation-event logging.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! human-readable diagnostics, while this port records what was generated
//! (outlines, section content, refinements, tier fallbacks) in a
//! machine-readable format such as JSONL.

use serde_json::Value;

/// A structured generation event.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields; implementations attach the timestamp at write time.
pub struct GenerationEvent {
    /// Event type identifier (e.g., "outline_generated", "tier_fallback").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording generation events.
///
/// `log` is intentionally synchronous and infallible so logging can never
/// disturb a generation pass; implementations swallow their own errors.
pub trait GenerationLogger: Send + Sync {
    fn log(&self, event: GenerationEvent);
}

/// No-op implementation for tests and when event logging is disabled.
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationEvent) {}
}
