//! Session-scoped memoization of search results.
//!
//! The cache is best-effort only: a lost write or an unparseable entry
//! degrades to a cache miss and another network call, never to an
//! error. Empty result sets are deliberately never stored so a flaky
//! upstream cannot pin a transient "no results" answer for the rest of
//! the session.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

use crate::suggestion::Suggestion;

const NAMESPACE: &str = "serpapi";
const REGION_TAGS: [&str; 2] = ["in", "rajasthan"];
const SEPARATOR: &str = ":";

#[derive(Error, Debug)]
#[error("cache write rejected: {0}")]
pub struct CacheWriteError(pub String);

/// Keyed string storage backing the cache.
///
/// Per-key get/put are individually atomic; no multi-key transaction is
/// ever required. Implementations may refuse writes (quota), which the
/// cache swallows.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: String) -> Result<(), CacheWriteError>;
}

/// In-process store, the default backend. Lives as long as the service
/// that owns it, the moral equivalent of one browser session.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: String) -> Result<(), CacheWriteError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CacheWriteError("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Search result cache keyed by normalized query text.
pub struct SearchCache<S> {
    store: S,
}

impl<S: SessionStore> SearchCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Namespace + fixed region tags + lowercased/trimmed query.
    ///
    /// Country and bounding box are not part of the key, so two calls
    /// differing only in those collide. Known limitation carried over
    /// from the original, not silently repaired here.
    pub fn key(query: &str) -> String {
        let mut parts = vec![NAMESPACE.to_string()];
        parts.extend(REGION_TAGS.iter().map(|tag| tag.to_string()));
        parts.push(query.trim().to_lowercase());
        parts.join(SEPARATOR)
    }

    /// Stored suggestions for a query, or `None` when the entry is
    /// absent, fails to parse, or holds an empty list.
    pub fn get(&self, query: &str) -> Option<Vec<Suggestion>> {
        let raw = self.store.get(&Self::key(query))?;

        match serde_json::from_str::<Vec<Suggestion>>(&raw) {
            Ok(suggestions) if !suggestions.is_empty() => Some(suggestions),
            Ok(_) => None,
            Err(err) => {
                debug!("discarding unparseable cache entry: {err}");
                None
            }
        }
    }

    /// Stores suggestions for a query. Empty lists are not persisted;
    /// store write failures are swallowed.
    pub fn put(&self, query: &str, suggestions: &[Suggestion]) {
        if suggestions.is_empty() {
            return;
        }

        let encoded = match serde_json::to_string(suggestions) {
            Ok(encoded) => encoded,
            Err(err) => {
                debug!("failed to encode cache entry: {err}");
                return;
            }
        };

        if let Err(err) = self.store.put(&Self::key(query), encoded) {
            debug!("cache write failed: {err}");
        }
    }
}
