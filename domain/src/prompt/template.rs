//! Prompt templates for outline, section, and refinement generation.
//!
//! All functions are pure and deterministic: identical inputs always
//! produce byte-identical prompt text.

use crate::document::entities::DocumentKind;

/// Templates for generating prompts at each drafting stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for outline generation
    pub fn outline_system() -> &'static str {
        "You are a content strategist."
    }

    /// User prompt for outline generation: exactly `section_count` titles,
    /// one per line, unnumbered.
    pub fn outline_prompt(topic: &str, kind: DocumentKind, section_count: usize) -> String {
        let content_type = match kind {
            DocumentKind::Report => "document section",
            DocumentKind::SlideDeck => "presentation slide",
        };
        format!(
            r#"Generate {} {} titles for: {}

Return only the titles, one per line, no numbering."#,
            section_count, content_type, topic
        )
    }

    /// System prompt for section content generation
    pub fn section_system() -> &'static str {
        "You are a professional business writer."
    }

    /// User prompt for one section's content.
    ///
    /// Reports ask for structured prose; slide decks ask for short
    /// imperative bullets. A `Context:` block with prior sections is
    /// embedded only when `context` is non-empty.
    pub fn section_prompt(
        topic: &str,
        section_title: &str,
        kind: DocumentKind,
        context: &str,
    ) -> String {
        let mut prompt = match kind {
            DocumentKind::Report => format!(
                r#"Write professional content for a business document about: {}

Section: {}"#,
                topic, section_title
            ),
            DocumentKind::SlideDeck => format!(
                r#"Create slide content for: {}

Slide: {}"#,
                topic, section_title
            ),
        };

        if !context.is_empty() {
            prompt.push_str(&format!("\nContext: {}", context));
        }

        match kind {
            DocumentKind::Report => prompt.push_str(
                r#"

Requirements:
- 3-4 well-structured paragraphs
- Professional business tone
- 250-350 words
- Include relevant examples or data
- Clear transitions between ideas"#,
            ),
            DocumentKind::SlideDeck => prompt.push_str(
                r#"

Format:
- 4-5 bullet points
- 8-12 words per bullet
- Start each with dash (-)
- Action-oriented language
- Include data when relevant"#,
            ),
        }

        prompt
    }

    /// System prompt for refinement
    pub fn refine_system() -> &'static str {
        "You are a professional editor."
    }

    /// User prompt for refining a section: embeds the current content
    /// verbatim and appends the edit request.
    pub fn refine_prompt(section_title: &str, current_content: &str, instruction: &str) -> String {
        format!(
            r#"Refine this content for section "{}":

{}

Request: {}

Maintain professional tone and key information."#,
            section_title, current_content, instruction
        )
    }
}
