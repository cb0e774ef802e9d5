//! Keyword store
//!
//! The classifier never fetches keywords itself. Callers hold a store, take a
//! snapshot of its custom keywords and pass that into each classification.

use crate::keywords::{builtin_keywords, is_builtin_keyword, Keyword};
use parking_lot::RwLock;
use smsguard_core::{Error, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Source of the active keyword list
pub trait KeywordStore: Send + Sync {
    /// Built-in keywords, shipped with the classifier
    fn builtin_keywords(&self) -> Vec<String> {
        builtin_keywords().iter().map(|k| k.to_string()).collect()
    }

    /// User-added keywords in store order
    fn custom_keywords(&self) -> Vec<String>;
}

/// Ordered in-memory keyword store
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeywordStore {
    custom: Vec<Keyword>,
}

impl InMemoryKeywordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from raw terms, skipping any the store rejects
    pub fn with_keywords<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for term in terms {
            if let Err(e) = store.add_keyword(term.as_ref()) {
                warn!("Skipping keyword '{}': {}", term.as_ref(), e);
            }
        }
        store
    }

    /// Add a custom keyword
    ///
    /// Rejects empty terms, terms shorter than two characters, and terms that
    /// fold to a built-in or an existing custom keyword.
    pub fn add_keyword(&mut self, term: &str) -> Result<Keyword> {
        let keyword = Keyword::parse(term)?;

        if is_builtin_keyword(keyword.as_str()) {
            return Err(Error::keyword(format!(
                "'{}' is already a built-in keyword",
                keyword
            )));
        }

        if self.custom.contains(&keyword) {
            return Err(Error::keyword(format!(
                "'{}' is already a custom keyword",
                keyword
            )));
        }

        info!("Added custom keyword: {}", keyword);
        self.custom.push(keyword.clone());
        Ok(keyword)
    }

    /// Remove a custom keyword, returning whether it was present
    pub fn remove_keyword(&mut self, term: &str) -> bool {
        let Ok(keyword) = Keyword::parse(term) else {
            return false;
        };

        let before = self.custom.len();
        self.custom.retain(|k| k != &keyword);
        let removed = self.custom.len() != before;
        if removed {
            info!("Removed custom keyword: {}", keyword);
        }
        removed
    }

    /// Drop every custom keyword
    pub fn clear_custom_keywords(&mut self) {
        info!("Cleared {} custom keywords", self.custom.len());
        self.custom.clear();
    }

    pub fn custom_keyword_count(&self) -> usize {
        self.custom.len()
    }

    /// Built-in keywords followed by custom keywords
    pub fn all_keywords(&self) -> Vec<String> {
        let mut all = self.builtin_keywords();
        all.extend(self.custom_keywords());
        all
    }
}

impl KeywordStore for InMemoryKeywordStore {
    fn custom_keywords(&self) -> Vec<String> {
        self.custom.iter().map(|k| k.as_str().to_string()).collect()
    }
}

/// Thread-safe handle to a keyword store
///
/// Writers take the write lock per mutation; classifications work on a
/// [`snapshot`](SharedKeywordStore::snapshot) so they never see a store
/// change mid-call.
#[derive(Debug, Clone, Default)]
pub struct SharedKeywordStore {
    inner: Arc<RwLock<InMemoryKeywordStore>>,
}

impl SharedKeywordStore {
    pub fn new(store: InMemoryKeywordStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn add_keyword(&self, term: &str) -> Result<Keyword> {
        self.inner.write().add_keyword(term)
    }

    pub fn remove_keyword(&self, term: &str) -> bool {
        self.inner.write().remove_keyword(term)
    }

    pub fn clear_custom_keywords(&self) {
        self.inner.write().clear_custom_keywords();
    }

    pub fn custom_keyword_count(&self) -> usize {
        self.inner.read().custom_keyword_count()
    }

    /// Copy of the custom keywords at this instant
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.read().custom_keywords()
    }
}

impl KeywordStore for SharedKeywordStore {
    fn custom_keywords(&self) -> Vec<String> {
        self.snapshot()
    }
}
