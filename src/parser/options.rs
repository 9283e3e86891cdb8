//! Parsing options and configuration.

use std::collections::BTreeMap;

/// Default limit on element nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for parsing SVG documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum element nesting depth (root = 1)
    pub max_depth: usize,

    /// Caller options carried through the document unexamined
    pub extra: BTreeMap<String, String>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Add a passthrough option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Get a passthrough option.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            extra: BTreeMap::new(),
        }
    }
}
