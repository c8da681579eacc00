//! Document entities: the shapes callers hand in and get back.
//!
//! These are plain value objects. The drafting core never persists them;
//! the request-handling layer owns storage and passes copies in per call.

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of document being drafted.
///
/// Controls prompt structure: reports get prose paragraphs, slide decks
/// get short imperative bullet lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Report,
    SlideDeck,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Report => "report",
            DocumentKind::SlideDeck => "slide_deck",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = DomainError;

    /// Accepts the file-format aliases (`docx`, `pptx`) used on the wire
    /// alongside the plain names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "report" | "docx" | "document" => Ok(DocumentKind::Report),
            "slide_deck" | "slides" | "pptx" | "presentation" => Ok(DocumentKind::SlideDeck),
            other => Err(DomainError::InvalidDocumentKind(other.to_string())),
        }
    }
}

/// Immutable description of the document to draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSpec {
    /// The main topic the whole document is about.
    pub main_topic: String,
    /// Report or slide deck.
    pub kind: DocumentKind,
}

impl DocumentSpec {
    pub fn new(main_topic: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            main_topic: main_topic.into(),
            kind,
        }
    }
}

/// One section of a document, identified by its ordering key.
///
/// `order` values need not be contiguous; they only need to form a total
/// order. Content generation always processes sections in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub title: String,
    pub order: u32,
}

impl SectionSpec {
    pub fn new(title: impl Into<String>, order: u32) -> Self {
        Self {
            title: title.into(),
            order,
        }
    }
}

/// Record of one refinement pass over a section.
///
/// Created by the refine operation and handed back to the caller for
/// persistence. The feedback fields (`liked`, `comment`) start unset and
/// are filled in later by a separate user action, never by the drafting
/// core itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementRecord {
    /// The user's refinement instruction.
    pub prompt: String,
    /// Section content before the refinement.
    pub previous_content: String,
    /// Section content after the refinement.
    pub new_content: String,
    /// When the refinement was produced.
    pub created_at: DateTime<Utc>,
    /// Thumbs up/down left by the user, if any.
    pub liked: Option<bool>,
    /// Free-text feedback left by the user, if any.
    pub comment: Option<String>,
}

impl RefinementRecord {
    /// Create a record with the current UTC timestamp and feedback unset.
    pub fn new(
        prompt: impl Into<String>,
        previous_content: impl Into<String>,
        new_content: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            previous_content: previous_content.into(),
            new_content: new_content.into(),
            created_at: Utc::now(),
            liked: None,
            comment: None,
        }
    }

    /// Attach user feedback. Used by the layer that owns the stored
    /// record; leaving either field `None` keeps the existing value.
    pub fn with_feedback(mut self, liked: Option<bool>, comment: Option<String>) -> Self {
        if liked.is_some() {
            self.liked = liked;
        }
        if comment.is_some() {
            self.comment = comment;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_aliases_parse() {
        assert_eq!("docx".parse::<DocumentKind>().unwrap(), DocumentKind::Report);
        assert_eq!(
            "pptx".parse::<DocumentKind>().unwrap(),
            DocumentKind::SlideDeck
        );
        assert_eq!(
            "report".parse::<DocumentKind>().unwrap(),
            DocumentKind::Report
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = "spreadsheet".parse::<DocumentKind>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidDocumentKind(_)));
    }

    #[test]
    fn test_refinement_record_starts_without_feedback() {
        let record = RefinementRecord::new("shorten", "long text", "short text");
        assert_eq!(record.previous_content, "long text");
        assert_eq!(record.new_content, "short text");
        assert!(record.liked.is_none());
        assert!(record.comment.is_none());
    }

    #[test]
    fn test_with_feedback_keeps_unset_fields() {
        let record = RefinementRecord::new("shorten", "a", "b")
            .with_feedback(Some(true), None)
            .with_feedback(None, Some("nice".to_string()));
        assert_eq!(record.liked, Some(true));
        assert_eq!(record.comment.as_deref(), Some("nice"));
    }
}
