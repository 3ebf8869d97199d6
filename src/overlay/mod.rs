//! Overlay store
//!
//! Per-page storage for resolved highlight rectangles. Each recomputation
//! pass replaces a page's overlay set wholesale; there is no merging or
//! incremental update. Readers always observe a complete set for a page.

mod types;

pub use types::{HighlightColor, OverlayRect, Rect};

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Replaceable per-page collection of overlay rectangles
///
/// Cheap to clone; clones share the same underlying map. Created empty
/// when a document is loaded, populated per page as layout becomes
/// available, cleared entirely on document or annotation reset.
#[derive(Debug, Clone, Default)]
pub struct OverlayStore {
    pages: Arc<RwLock<HashMap<usize, Vec<OverlayRect>>>>,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the overlay set for a page
    pub fn set_for_page(&self, page: usize, rects: Vec<OverlayRect>) {
        self.pages.write().insert(page, rects);
    }

    /// Current overlay set for a page, empty if never computed
    pub fn overlays_for_page(&self, page: usize) -> Vec<OverlayRect> {
        self.pages.read().get(&page).cloned().unwrap_or_default()
    }

    /// Reset all pages
    pub fn clear_all(&self) {
        self.pages.write().clear();
    }

    /// Pages that currently hold at least one overlay, sorted
    pub fn pages_with_overlays(&self) -> Vec<usize> {
        let pages = self.pages.read();
        let mut out: Vec<usize> = pages
            .iter()
            .filter(|(_, rects)| !rects.is_empty())
            .map(|(page, _)| *page)
            .collect();
        out.sort_unstable();
        out
    }

    /// Total number of overlay rectangles across all pages
    pub fn overlay_count(&self) -> usize {
        self.pages.read().values().map(|rects| rects.len()).sum()
    }
}
