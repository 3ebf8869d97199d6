//! Geometry projector
//!
//! Converts one located occurrence into page-relative rectangles by
//! intersecting its logical range with the fragment index, asking each
//! touched fragment for the boxes covering its intra-fragment sub-range,
//! and translating from viewport-relative to page-relative coordinates.

use crate::overlay::Rect;
use crate::page::{FragmentIndex, TextFragment};

use super::locate::Occurrence;

/// Project an occurrence onto the fragments it touches
///
/// A fragment whose geometry capability is unavailable is skipped without
/// failing the occurrence; partial geometry is better than none. The
/// projection is pure: the same inputs always yield the same rectangles.
pub fn project_occurrence(
    occurrence: &Occurrence,
    index: &FragmentIndex,
    fragments: &[Box<dyn TextFragment>],
    page_bounds: &Rect,
) -> Vec<Rect> {
    let mut rects = Vec::new();

    for entry in index.entries() {
        // Half-open interval overlap
        if entry.start >= occurrence.end || entry.end <= occurrence.start {
            continue;
        }

        let sub_start = occurrence.start.saturating_sub(entry.start);
        let sub_end = (occurrence.end - entry.start).min(entry.len());
        if sub_start >= sub_end {
            continue;
        }

        let Some(fragment) = fragments.get(entry.fragment) else {
            continue;
        };
        match fragment.range_rects(sub_start, sub_end) {
            Some(fragment_rects) => {
                rects.extend(
                    fragment_rects
                        .into_iter()
                        .map(|r| r.translate(-page_bounds.x, -page_bounds.y)),
                );
            }
            None => {
                tracing::trace!(
                    fragment = entry.fragment,
                    "fragment has no geometry for sub-range, skipping"
                );
            }
        }
    }

    rects
}
