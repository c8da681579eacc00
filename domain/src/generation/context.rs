//! Running context threaded through one document-generation pass.

/// How many characters of each section's content are carried forward.
pub const CONTEXT_FRAGMENT_CHARS: usize = 200;

/// Accumulator of prior sections' summaries within a single
/// document-generation run.
///
/// Later sections see a short fragment of everything generated before
/// them, so the document reads as one narrative instead of five
/// disconnected essays. The context is local to one run; it is never
/// persisted or shared across runs.
#[derive(Debug, Default, Clone)]
pub struct GenerationContext {
    buffer: String,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section summary: the title plus the first
    /// [`CONTEXT_FRAGMENT_CHARS`] characters of its content and a
    /// truncation marker.
    pub fn push_section(&mut self, title: &str, content: &str) {
        let fragment: String = content.chars().take(CONTEXT_FRAGMENT_CHARS).collect();
        self.buffer.push_str(&format!("\n{}: {}...", title, fragment));
    }

    /// The accumulated context block, empty before the first section.
    pub fn render(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
