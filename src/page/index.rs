//! Fragment index
//!
//! Builds the flat logical text for one page and the table mapping
//! logical offsets back to (fragment, intra-fragment offset). Built once
//! per recomputation pass and reused for every quotation resolved in that
//! pass.

use super::fragment::TextFragment;

/// Half-open logical range contributed by one fragment
///
/// Entries are contiguous, non-overlapping, cover the full logical text
/// exactly once, and appear in fragment order. A degenerate (empty)
/// fragment contributes a zero-length range but keeps its order slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentIndexEntry {
    /// Index of the source fragment in the page's fragment sequence
    pub fragment: usize,
    /// Logical byte offset where this fragment's content starts
    pub start: usize,
    /// Logical byte offset just past this fragment's content
    pub end: usize,
}

impl FragmentIndexEntry {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Flat logical text plus the reverse offset table for one page
#[derive(Debug, Clone)]
pub struct FragmentIndex {
    text: String,
    entries: Vec<FragmentIndexEntry>,
}

impl FragmentIndex {
    /// Walk fragments in layout order, concatenating their literal
    /// content and recording each contributed range
    pub fn build(fragments: &[Box<dyn TextFragment>]) -> Self {
        let mut text = String::new();
        let mut entries = Vec::with_capacity(fragments.len());

        for (index, fragment) in fragments.iter().enumerate() {
            let start = text.len();
            text.push_str(fragment.content());
            entries.push(FragmentIndexEntry {
                fragment: index,
                start,
                end: text.len(),
            });
        }

        Self { text, entries }
    }

    /// The page's flat logical text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Offset table, in fragment order
    pub fn entries(&self) -> &[FragmentIndexEntry] {
        &self.entries
    }
}
