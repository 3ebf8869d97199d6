//! Annotation types following the W3C Web Annotation Data Model
//!
//! Records arrive from an external annotation source; the core consumes
//! only exact-text selectors and `color:<name>` tags. Everything else is
//! carried for interoperability and round-trip fidelity.
//!
//! Reference: <https://www.w3.org/TR/annotation-model/>

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A complete annotation record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Unique identifier (UUID)
    pub id: String,
    /// Free-form tags; the core reads `color:<name>` tags only
    #[serde(default)]
    pub tags: Vec<String>,
    /// What is being annotated; may be empty
    #[serde(default)]
    pub target: Vec<AnnotationTarget>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// The target of an annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationTarget {
    /// Source document URI
    pub source: String,
    /// Multiple selectors for robust anchoring
    #[serde(default)]
    pub selectors: Vec<Selector>,
}

/// Selector types for identifying text/positions
///
/// Only `TextQuote` is resolved into highlights; the other kinds are
/// preserved so records from richer sources survive a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "PascalCase")]
pub enum Selector {
    /// Text quote with context
    #[serde(rename = "TextQuoteSelector")]
    TextQuote {
        /// The exact text that was highlighted
        exact: String,
        /// Text before the selection (for context)
        #[serde(skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
        /// Text after the selection (for context)
        #[serde(skip_serializing_if = "Option::is_none")]
        suffix: Option<String>,
    },
    /// Character position within document
    #[serde(rename = "TextPositionSelector")]
    TextPosition {
        /// Start character offset
        start: usize,
        /// End character offset
        end: usize,
    },
    /// Fragment identifier
    #[serde(rename = "FragmentSelector")]
    Fragment {
        /// The fragment value
        value: String,
    },
}

impl Annotation {
    /// Create a new annotation with a single target
    pub fn new(target: AnnotationTarget) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            tags: Vec::new(),
            target: vec![target],
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a highlight annotation anchored by an exact text quote
    pub fn new_highlight(source: &str, exact: &str) -> Self {
        Self::new(AnnotationTarget::from_text_quote(source, exact, None, None))
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    /// The quotation this annotation anchors to, if any
    ///
    /// First exact-text selector found across the annotation's targets,
    /// in target order. An annotation without one yields no quotation.
    pub fn quote(&self) -> Option<&str> {
        self.target.iter().find_map(|t| {
            t.selectors.iter().find_map(|s| match s {
                Selector::TextQuote { exact, .. } => Some(exact.as_str()),
                _ => None,
            })
        })
    }

    /// The name from the first `color:<name>` tag, if any
    pub fn color_name(&self) -> Option<&str> {
        self.tags.iter().find_map(|t| t.strip_prefix("color:"))
    }
}

impl AnnotationTarget {
    /// Create a target anchored by an exact text quote
    pub fn from_text_quote(
        source: &str,
        exact: &str,
        prefix: Option<&str>,
        suffix: Option<&str>,
    ) -> Self {
        Self {
            source: source.to_string(),
            selectors: vec![Selector::TextQuote {
                exact: exact.to_string(),
                prefix: prefix.map(|s| s.to_string()),
                suffix: suffix.map(|s| s.to_string()),
            }],
        }
    }

    /// Create a target with multiple selectors for robust anchoring
    pub fn with_selectors(source: &str, selectors: Vec<Selector>) -> Self {
        Self {
            source: source.to_string(),
            selectors,
        }
    }

    /// Add a text position selector
    pub fn add_text_position(&mut self, start: usize, end: usize) {
        self.selectors.push(Selector::TextPosition { start, end });
    }
}
