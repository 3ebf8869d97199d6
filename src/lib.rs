//! Subrayado
//!
//! Quote-anchored highlight overlay engine for paginated, pre-rendered
//! documents. Given a page's rendered text fragments and a set of
//! annotations anchored by exact text quotations, it finds every
//! occurrence of each quotation and produces the page-relative
//! rectangles a rendering surface needs to draw highlight overlays,
//! including occurrences that span multiple non-contiguous fragments.
//!
//! # Modules
//!
//! - `annotations`: W3C-style annotation records and quotation extraction
//! - `page`: rendering-collaborator boundary (fragments, layout, index)
//! - `resolve`: quote location and geometry projection
//! - `overlay`: overlay rectangles, colors, and the per-page store
//! - `scheduler`: settle/debounce-driven recomputation per page
//!
//! Document decoding, rendering, annotation persistence, and UI are all
//! external collaborators; this crate only consumes their interfaces.

pub mod annotations;
pub mod config;
pub mod overlay;
pub mod page;
pub mod resolve;
pub mod scheduler;

pub use annotations::{quote_targets, Annotation, AnnotationTarget, QuoteTarget, Selector};
pub use config::HighlightConfig;
pub use overlay::{HighlightColor, OverlayRect, OverlayStore, Rect};
pub use page::{
    FragmentIndex, FragmentIndexEntry, PageError, PageLayout, PageProvider, PositionedFragment,
    TextFragment,
};
pub use resolve::{find_occurrences, resolve_page, MatchPolicy, Occurrence};
pub use scheduler::HighlightScheduler;
