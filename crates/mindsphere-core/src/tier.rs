//! Signal tiers and item references.

use std::fmt;

/// Priority bucket a signal item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Primary,
    Secondary,
    Tertiary,
}

impl Tier {
    /// All tiers in render order.
    pub const ALL: [Tier; 3] = [Tier::Primary, Tier::Secondary, Tier::Tertiary];

    /// Key used in the content document (`signals.<name>`).
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Primary => "primary",
            Tier::Secondary => "secondary",
            Tier::Tertiary => "tertiary",
        }
    }

    /// Section heading, e.g. "Primary Signals".
    pub fn heading(&self) -> String {
        format!("{} Signals", capitalize(self.name()))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Upper-case the first character only. The rest of the string is kept as is.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reference to one signal item inside a [`ContentDocument`](crate::ContentDocument).
///
/// Rendered cards hold one of these instead of a copy of the item, and the
/// interaction layer resolves it with [`ContentDocument::signal`](crate::ContentDocument::signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalRef {
    pub tier: Tier,
    pub index: usize,
}

impl SignalRef {
    pub fn new(tier: Tier, index: usize) -> Self {
        Self { tier, index }
    }
}

impl fmt::Display for SignalRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "signals.{}[{}]", self.tier, self.index)
    }
}
