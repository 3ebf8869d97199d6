//! Quotation extraction
//!
//! Reduces an annotation set to the quote targets the resolution pipeline
//! consumes: the literal exact string plus its display color. Annotations
//! without an exact-text selector are skipped entirely.

use crate::overlay::HighlightColor;

use super::types::Annotation;

/// A quotation ready for resolution against a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteTarget {
    /// Literal exact string to match, byte for byte
    pub exact: String,
    /// Display color for the resulting overlays
    pub color: HighlightColor,
}

/// Extract quote targets from an annotation set
///
/// The first `color:<name>` tag on an annotation wins; the default color
/// applies when no such tag is present or the name is unrecognized.
pub fn quote_targets(annotations: &[Annotation], default_color: HighlightColor) -> Vec<QuoteTarget> {
    annotations
        .iter()
        .filter_map(|annotation| {
            let exact = annotation.quote()?;
            let color = match annotation.color_name() {
                Some(name) => HighlightColor::from_name(name).unwrap_or(default_color),
                None => default_color,
            };
            Some(QuoteTarget {
                exact: exact.to_string(),
                color,
            })
        })
        .collect()
}
