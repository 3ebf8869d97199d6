//! Annotation records and quotation extraction

mod quotes;
mod types;

pub use quotes::{quote_targets, QuoteTarget};
pub use types::{Annotation, AnnotationTarget, Selector};
