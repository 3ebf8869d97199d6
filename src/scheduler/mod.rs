//! Recomputation scheduler
//!
//! Decides when to (re)run the resolution pipeline per page: after each
//! page's layout-ready signal (with a short settle delay while the
//! renderer finishes attaching text geometry), and after annotation-set
//! changes (with a shared debounce). Recomputation is idempotent and
//! full-replace, so racing triggers for the same page are harmless; the
//! later write wins.
//!
//! # Session lifecycle
//!
//! - `Idle`: no document loaded; layout-ready signals are ignored.
//! - `AwaitingLayout`: a document with a known page count is loaded;
//!   pages report layout-ready asynchronously, in any order.
//! - `reset()` returns to `Idle`, cancelling pending timers and
//!   discarding the overlay store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::annotations::{quote_targets, Annotation};
use crate::config::HighlightConfig;
use crate::overlay::OverlayStore;
use crate::page::PageProvider;
use crate::resolve;

/// Per-document session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    Idle,
    AwaitingLayout { page_count: usize },
}

/// Pending delayed recomputations
#[derive(Default)]
struct Timers {
    pages: HashMap<usize, JoinHandle<()>>,
    debounce: Option<JoinHandle<()>>,
}

impl Timers {
    fn cancel_all(&mut self) {
        for (_, handle) in self.pages.drain() {
            handle.abort();
        }
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }
}

/// Drives recomputation of highlight overlays for one document session
///
/// Cheap to clone; clones share the same session. All entry points are
/// non-blocking: they record state and schedule work on the runtime.
#[derive(Clone)]
pub struct HighlightScheduler {
    inner: Arc<Inner>,
}

struct Inner {
    provider: Arc<dyn PageProvider>,
    store: OverlayStore,
    config: HighlightConfig,
    session: Mutex<Session>,
    annotations: Mutex<Vec<Annotation>>,
    timers: Mutex<Timers>,
    /// Bumped on reset; tasks from an older epoch do not run
    epoch: AtomicU64,
}

impl HighlightScheduler {
    pub fn new(provider: Arc<dyn PageProvider>, config: HighlightConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                provider,
                store: OverlayStore::new(),
                config,
                session: Mutex::new(Session::Idle),
                annotations: Mutex::new(Vec::new()),
                timers: Mutex::new(Timers::default()),
                epoch: AtomicU64::new(0),
            }),
        }
    }

    /// Handle to the overlay store the rendering surface reads from
    pub fn overlays(&self) -> OverlayStore {
        self.inner.store.clone()
    }

    /// A document finished loading
    ///
    /// Reads the page count from the rendering collaborator and discards
    /// any state left over from a previous document.
    pub fn document_loaded(&self) {
        let page_count = self.inner.provider.page_count();
        tracing::debug!(page_count, "document loaded, awaiting page layout");
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
        self.inner.timers.lock().cancel_all();
        self.inner.store.clear_all();
        *self.inner.session.lock() = Session::AwaitingLayout { page_count };
    }

    /// A page reported layout-ready
    ///
    /// Schedules a delayed recomputation for that page. A signal for a
    /// page outside the loaded document, or with no document loaded, is
    /// ignored.
    pub fn page_layout_ready(&self, page: usize) {
        let session = *self.inner.session.lock();
        match session {
            Session::AwaitingLayout { page_count } if (1..=page_count).contains(&page) => {
                self.inner.schedule_page(page);
            }
            _ => {
                tracing::debug!(page, "ignoring layout-ready signal outside session");
            }
        }
    }

    /// The external annotation set changed
    ///
    /// An empty set clears all overlays immediately, with no delay.
    /// Otherwise all known pages are recomputed after the shared
    /// debounce delay.
    pub fn set_annotations(&self, annotations: Vec<Annotation>) {
        let emptied = annotations.is_empty();
        *self.inner.annotations.lock() = annotations;

        if emptied {
            tracing::debug!("annotation set emptied, clearing all overlays");
            if let Some(handle) = self.inner.timers.lock().debounce.take() {
                handle.abort();
            }
            self.inner.store.clear_all();
        } else {
            self.inner.schedule_all_pages();
        }
    }

    /// The document was reset (URL change)
    ///
    /// Returns to idle, cancelling pending timers and discarding all
    /// per-page state and the overlay store.
    pub fn reset(&self) {
        tracing::debug!("resetting document session");
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
        self.inner.timers.lock().cancel_all();
        *self.inner.session.lock() = Session::Idle;
        self.inner.annotations.lock().clear();
        self.inner.store.clear_all();
    }
}

impl Inner {
    /// Schedule a settle-delayed recomputation for one page, superseding
    /// any pending one for the same page
    fn schedule_page(self: &Arc<Self>, page: usize) {
        let inner = Arc::clone(self);
        let epoch = self.epoch.load(Ordering::SeqCst);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.config.settle_delay).await;
            if inner.epoch.load(Ordering::SeqCst) != epoch {
                return;
            }
            inner.recompute_page(page).await;
        });

        if let Some(superseded) = self.timers.lock().pages.insert(page, handle) {
            superseded.abort();
        }
    }

    /// Schedule a debounced recomputation of every known page
    fn schedule_all_pages(self: &Arc<Self>) {
        let inner = Arc::clone(self);
        let epoch = self.epoch.load(Ordering::SeqCst);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.config.debounce_delay).await;
            if inner.epoch.load(Ordering::SeqCst) != epoch {
                return;
            }
            let page_count = match *inner.session.lock() {
                Session::AwaitingLayout { page_count } => page_count,
                Session::Idle => return,
            };
            for page in 1..=page_count {
                inner.recompute_page(page).await;
            }
        });

        if let Some(superseded) = self.timers.lock().debounce.replace(handle) {
            superseded.abort();
        }
    }

    /// One full recomputation pass for one page
    ///
    /// Runs to completion synchronously once the layout is in hand, then
    /// atomically replaces that page's overlay set. A page whose layout
    /// is unavailable yields an empty set rather than stale overlays.
    async fn recompute_page(&self, page: usize) {
        let quotes = {
            let annotations = self.annotations.lock();
            quote_targets(&annotations, self.config.default_color)
        };

        let layout = match self.provider.page_layout(page).await {
            Ok(layout) => layout,
            Err(err) => {
                tracing::debug!(page, error = %err, "page layout unavailable, emptying overlays");
                self.store.set_for_page(page, Vec::new());
                return;
            }
        };

        let overlays = resolve::resolve_page(&layout, &quotes, self.config.match_policy);
        self.store.set_for_page(page, overlays);
    }
}
