//! Quote locator
//!
//! Finds every left-to-right occurrence of a literal quotation within a
//! page's flat logical text. Matching is byte-exact: no normalization,
//! trimming, or case folding.

use serde::{Deserialize, Serialize};

/// How the scan resumes after a match
///
/// The default resumes one character past the match start, so overlapping
/// occurrences of a repeating pattern are all reported. `NonOverlapping`
/// resumes past the match end instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    #[default]
    Overlapping,
    NonOverlapping,
}

/// One located match of a quotation, as a half-open byte range into the
/// flat logical text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub start: usize,
    pub end: usize,
}

/// Scan `text` for literal occurrences of `quotation`
///
/// Occurrences come back in non-decreasing start order. An empty
/// quotation matches nothing, and no match is an empty result rather
/// than an error.
pub fn find_occurrences(text: &str, quotation: &str, policy: MatchPolicy) -> Vec<Occurrence> {
    if quotation.is_empty() {
        return Vec::new();
    }

    let mut occurrences = Vec::new();
    let mut pos = 0;

    while let Some(found) = text[pos..].find(quotation) {
        let start = pos + found;
        let end = start + quotation.len();
        occurrences.push(Occurrence { start, end });

        pos = match policy {
            // Advance past the first character of the match; the next
            // scan position stays on a character boundary.
            MatchPolicy::Overlapping => {
                start
                    + quotation
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1)
            }
            MatchPolicy::NonOverlapping => end,
        };
    }

    occurrences
}
