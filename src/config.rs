//! Configuration for the highlight engine

use std::env;
use std::time::Duration;

use crate::overlay::HighlightColor;
use crate::resolve::MatchPolicy;

/// Tunable engine settings
///
/// The settle delay tolerates the known lag between a page's layout-ready
/// signal and its text geometry actually being attached by the renderer;
/// it is a tolerance, not a correctness requirement. The debounce delay
/// batches bursts of annotation-set changes into one recomputation.
#[derive(Debug, Clone)]
pub struct HighlightConfig {
    /// Delay between a layout-ready signal and that page's recomputation
    pub settle_delay: Duration,
    /// Shared delay before recomputing all pages after the annotation
    /// set changes
    pub debounce_delay: Duration,
    /// Color used when an annotation carries no recognized color tag
    pub default_color: HighlightColor,
    /// Occurrence scan policy
    pub match_policy: MatchPolicy,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(250),
            debounce_delay: Duration::from_millis(150),
            default_color: HighlightColor::Yellow,
            match_policy: MatchPolicy::Overlapping,
        }
    }
}

impl HighlightConfig {
    /// Load settings from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an injected variable lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            settle_delay: lookup("HIGHLIGHT_SETTLE_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.settle_delay),
            debounce_delay: lookup("HIGHLIGHT_DEBOUNCE_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.debounce_delay),
            default_color: lookup("HIGHLIGHT_DEFAULT_COLOR")
                .and_then(|v| HighlightColor::from_name(&v))
                .unwrap_or(defaults.default_color),
            match_policy: match lookup("HIGHLIGHT_MATCH_POLICY").as_deref() {
                Some("nonoverlapping") => MatchPolicy::NonOverlapping,
                _ => defaults.match_policy,
            },
        }
    }
}
