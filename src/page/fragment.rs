//! Text fragments
//!
//! A fragment is the smallest unit of already-rendered text with
//! independent layout geometry. Fragments are produced and owned by the
//! rendering collaborator; the core only reads them for the lifetime of
//! one recomputation pass.

use crate::overlay::Rect;

/// An opaque unit of rendered text with its own geometry capability
///
/// `range_rects` takes byte offsets into the fragment's UTF-8 content;
/// callers only ever pass boundaries that fall on character boundaries.
/// A fragment may report more than one box for a sub-range (line wrap or
/// glyph-level splits within the fragment), and reports `None` when it
/// has no renderable geometry for the range.
pub trait TextFragment: Send + Sync {
    /// Literal string content, never normalized or trimmed
    fn content(&self) -> &str;

    /// Viewport-relative boxes covering the byte sub-range `start..end`
    fn range_rects(&self, start: usize, end: usize) -> Option<Vec<Rect>>;
}

/// Fragment built from per-character boxes
///
/// This is the bridge from structured text extraction (one box per glyph)
/// to the fragment geometry capability. Consecutive characters whose
/// boxes sit on the same visual line are merged into one run rectangle,
/// so a wrapped fragment yields one box per line.
#[derive(Debug, Clone)]
pub struct PositionedFragment {
    content: String,
    boxes: Vec<Rect>,
}

impl PositionedFragment {
    /// Create from content and one box per character, in character order
    ///
    /// The box list may be empty (fragment with no renderable geometry);
    /// otherwise it must have one entry per character of `content`.
    pub fn new(content: impl Into<String>, boxes: Vec<Rect>) -> Self {
        Self {
            content: content.into(),
            boxes,
        }
    }

    /// Create from (character, box) pairs
    pub fn from_chars(chars: impl IntoIterator<Item = (char, Rect)>) -> Self {
        let mut content = String::new();
        let mut boxes = Vec::new();
        for (c, rect) in chars {
            content.push(c);
            boxes.push(rect);
        }
        Self { content, boxes }
    }

    /// Whether two character boxes share a visual line
    fn same_line(a: &Rect, b: &Rect) -> bool {
        let tolerance = a.height.min(b.height) * 0.5;
        (a.y - b.y).abs() <= tolerance
    }
}

impl TextFragment for PositionedFragment {
    fn content(&self) -> &str {
        &self.content
    }

    fn range_rects(&self, start: usize, end: usize) -> Option<Vec<Rect>> {
        if self.boxes.is_empty() {
            return None;
        }

        let mut runs: Vec<Rect> = Vec::new();
        for (char_index, (byte_offset, c)) in self.content.char_indices().enumerate() {
            if byte_offset < start {
                continue;
            }
            if byte_offset + c.len_utf8() > end {
                break;
            }
            let Some(glyph) = self.boxes.get(char_index) else {
                break;
            };
            match runs.last_mut() {
                Some(run) if Self::same_line(run, glyph) => *run = run.union(glyph),
                _ => runs.push(*glyph),
            }
        }

        Some(runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monospace boxes: 6pt wide, 10pt tall, starting at (x0, y)
    fn char_boxes(count: usize, x0: f32, y: f32) -> Vec<Rect> {
        (0..count)
            .map(|i| Rect::new(x0 + i as f32 * 6.0, y, 6.0, 10.0))
            .collect()
    }

    #[test]
    fn test_single_line_merges_to_one_rect() {
        let fragment = PositionedFragment::new("hello", char_boxes(5, 12.0, 20.0));
        let rects = fragment.range_rects(0, 5).unwrap();
        assert_eq!(rects, vec![Rect::new(12.0, 20.0, 30.0, 10.0)]);
    }

    #[test]
    fn test_sub_range_covers_only_requested_chars() {
        let fragment = PositionedFragment::new("hello", char_boxes(5, 0.0, 0.0));
        let rects = fragment.range_rects(1, 3).unwrap();
        assert_eq!(rects, vec![Rect::new(6.0, 0.0, 12.0, 10.0)]);
    }

    #[test]
    fn test_line_wrap_yields_one_rect_per_line() {
        // "wrapped!" with four chars on each of two lines
        let mut boxes = char_boxes(4, 0.0, 0.0);
        boxes.extend(char_boxes(4, 0.0, 14.0));
        let fragment = PositionedFragment::new("wrapped!", boxes);

        let rects = fragment.range_rects(0, 8).unwrap();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 24.0, 10.0));
        assert_eq!(rects[1], Rect::new(0.0, 14.0, 24.0, 10.0));
    }

    #[test]
    fn test_no_geometry_reports_none() {
        let fragment = PositionedFragment::new("hello", Vec::new());
        assert!(fragment.range_rects(0, 5).is_none());
    }

    #[test]
    fn test_empty_sub_range_yields_no_rects() {
        let fragment = PositionedFragment::new("hello", char_boxes(5, 0.0, 0.0));
        let rects = fragment.range_rects(2, 2).unwrap();
        assert!(rects.is_empty());
    }

    #[test]
    fn test_multibyte_content_uses_byte_offsets() {
        // "añejo": 'ñ' is two bytes, so byte offsets are 0,1,3,4,5
        let fragment = PositionedFragment::from_chars(
            "añejo"
                .chars()
                .enumerate()
                .map(|(i, c)| (c, Rect::new(i as f32 * 6.0, 0.0, 6.0, 10.0))),
        );
        let rects = fragment.range_rects(1, 3).unwrap();
        assert_eq!(rects, vec![Rect::new(6.0, 0.0, 6.0, 10.0)]);
    }
}
