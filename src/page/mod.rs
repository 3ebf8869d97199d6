//! Page layout boundary
//!
//! Contracts with the rendering collaborator: per page it supplies a
//! 1-based page number, a viewport-relative bounding box, and the ordered
//! text fragments with their geometry capability, plus an asynchronous
//! layout-ready signal (delivered to the scheduler by the embedding
//! application, not modeled here).

mod error;
mod fragment;
mod index;

pub use error::{PageError, Result};
pub use fragment::{PositionedFragment, TextFragment};
pub use index::{FragmentIndex, FragmentIndexEntry};

use async_trait::async_trait;

use crate::overlay::Rect;

/// One page's rendered layout, valid for a single recomputation pass
pub struct PageLayout {
    /// 1-based page number
    pub page: usize,
    /// Viewport-relative page bounding box
    pub bounds: Rect,
    /// Text fragments in reading/layout order
    pub fragments: Vec<Box<dyn TextFragment>>,
}

/// Rendering collaborator interface
///
/// Implementations wrap the external rendering engine. `page_layout` is
/// called once per recomputation pass for a page and may fail with
/// [`PageError::NotReady`] while the renderer is still attaching text
/// geometry; the scheduler treats any error as an empty page and retries
/// on the next scheduled recomputation.
#[async_trait]
pub trait PageProvider: Send + Sync {
    /// Number of pages in the loaded document
    fn page_count(&self) -> usize;

    /// Produce the current layout for a page (1-based)
    async fn page_layout(&self, page: usize) -> Result<PageLayout>;
}
