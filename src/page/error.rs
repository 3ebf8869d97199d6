//! Page boundary errors
//!
//! Errors reported by the rendering collaborator at the `PageProvider`
//! boundary. Inside the core none of these are fatal: a page whose layout
//! cannot be produced simply yields an empty overlay set and is retried
//! on the next scheduled recomputation.

use thiserror::Error;

/// Error from the rendering collaborator
#[derive(Debug, Error)]
pub enum PageError {
    /// Page number outside 1..=page_count
    #[error("Page out of range: {0}")]
    PageOutOfRange(usize),

    /// Page exists but its layout/text geometry is not available yet
    #[error("Page not laid out yet: {0}")]
    NotReady(usize),

    /// Renderer-side failure producing the layout
    #[error("Render error: {0}")]
    Renderer(String),
}

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, PageError>;
