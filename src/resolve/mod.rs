//! Quote resolution pipeline
//!
//! One recomputation pass for a single page: build the fragment index,
//! locate every occurrence of every quotation, project each occurrence to
//! page-relative rectangles, and tag them with the quotation's display
//! color. The pass is pure and runs to completion synchronously, so a
//! page's overlay sequence is always internally consistent.

mod locate;
mod project;

pub use locate::{find_occurrences, MatchPolicy, Occurrence};
pub use project::project_occurrence;

use crate::annotations::QuoteTarget;
use crate::overlay::OverlayRect;
use crate::page::{FragmentIndex, PageLayout};

/// Resolve all quotations against one page's layout
///
/// Anomalies degrade to fewer or no overlays: quotations absent from the
/// page text, pages with no textual content, and fragments without
/// geometry all simply contribute nothing.
pub fn resolve_page(layout: &PageLayout, quotes: &[QuoteTarget], policy: MatchPolicy) -> Vec<OverlayRect> {
    let index = FragmentIndex::build(&layout.fragments);
    let mut overlays = Vec::new();

    for quote in quotes {
        let occurrences = find_occurrences(index.text(), &quote.exact, policy);
        for occurrence in &occurrences {
            for rect in project_occurrence(occurrence, &index, &layout.fragments, &layout.bounds) {
                overlays.push(OverlayRect::from_rect(rect, quote.color));
            }
        }
    }

    tracing::debug!(
        page = layout.page,
        quotes = quotes.len(),
        overlays = overlays.len(),
        "resolved page overlays"
    );

    overlays
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{HighlightColor, Rect};
    use crate::page::{PositionedFragment, TextFragment};

    fn mono_fragment(content: &str, x0: f32, y: f32) -> Box<dyn TextFragment> {
        let boxes = content
            .chars()
            .enumerate()
            .map(|(i, _)| Rect::new(x0 + i as f32 * 6.0, y, 6.0, 10.0))
            .collect();
        Box::new(PositionedFragment::new(content, boxes))
    }

    fn layout(fragments: Vec<Box<dyn TextFragment>>) -> PageLayout {
        PageLayout {
            page: 1,
            bounds: Rect::new(0.0, 0.0, 612.0, 792.0),
            fragments,
        }
    }

    fn quote(exact: &str, color: HighlightColor) -> QuoteTarget {
        QuoteTarget {
            exact: exact.to_string(),
            color,
        }
    }

    #[test]
    fn test_resolves_quote_across_fragments() {
        let layout = layout(vec![
            mono_fragment("The quick ", 0.0, 0.0),
            mono_fragment("brown fox", 60.0, 0.0),
        ]);
        let quotes = vec![quote("quick brown", HighlightColor::Yellow)];

        let overlays = resolve_page(&layout, &quotes, MatchPolicy::Overlapping);
        assert_eq!(overlays.len(), 2);
        assert!(overlays.iter().all(|o| o.color == HighlightColor::Yellow));
    }

    #[test]
    fn test_each_quote_keeps_its_color() {
        let layout = layout(vec![mono_fragment("alpha beta", 0.0, 0.0)]);
        let quotes = vec![
            quote("alpha", HighlightColor::Green),
            quote("beta", HighlightColor::Pink),
        ];

        let overlays = resolve_page(&layout, &quotes, MatchPolicy::Overlapping);
        assert_eq!(overlays.len(), 2);
        assert_eq!(overlays[0].color, HighlightColor::Green);
        assert_eq!(overlays[1].color, HighlightColor::Pink);
    }

    #[test]
    fn test_repeated_quote_resolves_every_occurrence() {
        let layout = layout(vec![mono_fragment("fox and fox", 0.0, 0.0)]);
        let quotes = vec![quote("fox", HighlightColor::Yellow)];

        let overlays = resolve_page(&layout, &quotes, MatchPolicy::Overlapping);
        assert_eq!(overlays.len(), 2);
        assert_ne!(overlays[0].left, overlays[1].left);
    }

    #[test]
    fn test_absent_quote_yields_empty() {
        let layout = layout(vec![mono_fragment("some page text", 0.0, 0.0)]);
        let quotes = vec![quote("zzz", HighlightColor::Yellow)];

        assert!(resolve_page(&layout, &quotes, MatchPolicy::Overlapping).is_empty());
    }

    #[test]
    fn test_page_without_text() {
        let layout = layout(Vec::new());
        let quotes = vec![quote("anything", HighlightColor::Yellow)];

        assert!(resolve_page(&layout, &quotes, MatchPolicy::Overlapping).is_empty());
    }

    #[test]
    fn test_no_quotes_yields_empty() {
        let layout = layout(vec![mono_fragment("text", 0.0, 0.0)]);
        assert!(resolve_page(&layout, &[], MatchPolicy::Overlapping).is_empty());
    }
}
