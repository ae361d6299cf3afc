//! Page view context.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::PageConfig;

/// Identifier for one page view, used to correlate log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageViewId(pub String);

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

impl PageViewId {
    /// Generate an ID from a caller-supplied seed (e.g. the page load timestamp).
    pub fn from_seed(seed: u64) -> Self {
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:x}", seed, seq))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for PageViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a component needs to know about the current page view.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub view_id: PageViewId,
    pub config: PageConfig,
}

impl PageContext {
    pub fn new(view_id: PageViewId, config: PageConfig) -> Self {
        Self { view_id, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        let a = PageViewId::from_seed(1_700_000_000_000);
        let b = PageViewId::from_seed(1_700_000_000_000);
        assert_ne!(a, b);
        assert!(a.to_string().starts_with("18bcfe56800-"));
    }
}
