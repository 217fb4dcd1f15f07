use std::collections::BTreeSet;

use smol_str::SmolStr;

/// Identifiers whose embed has been confirmed processed.
///
/// Append-only apart from [`LoadedSet::clear`], which only a full feed retry calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedSet(BTreeSet<SmolStr>);

impl LoadedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the identifier was not already present.
    pub fn insert(&mut self, identifier: impl Into<SmolStr>) -> bool {
        self.0.insert(identifier.into())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.0.contains(identifier)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(SmolStr::as_str)
    }
}

/// Readiness of the external script, as two independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializationState {
    pub is_initializing: bool,
    pub has_error: bool,
}

impl Default for InitializationState {
    fn default() -> Self {
        Self {
            is_initializing: true,
            has_error: false,
        }
    }
}

impl InitializationState {
    pub fn status(self) -> FeedStatus {
        if self.has_error {
            FeedStatus::Error
        } else if self.is_initializing {
            FeedStatus::Initializing
        } else {
            FeedStatus::Ready
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Initializing,
    Ready,
    Error,
}

/// What a single post should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostLoadState {
    /// Fallback with a spinner.
    Pending,
    /// Live embed.
    Loaded,
    /// Retries ran out; fallback stays up without a spinner.
    Unavailable,
}
