//! Collection cache port for the caller's data-fetching layer.
//!
//! List screens fetch a collection, key it, and invalidate that key after
//! a mutation so the next read refetches. The grid itself performs no
//! I/O and never awaits a refresh; this port exists so the fetch layer is
//! an explicit, injected collaborator instead of an ambient singleton,
//! which keeps the whole flow testable without a network.
//!
//! Typical flow: a mutation handler calls [`CollectionCache::invalidate`],
//! a listener on [`MemoryCache::invalidated`] refetches, and the fresh
//! rows land in the grid via
//! [`RowModel::set_rows`](crate::model::RowModel::set_rows).

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use salam_grid_core::Signal;

/// Identifies one cached collection.
///
/// Keys are hierarchical, slash-joined segments, so related collections
/// can be invalidated together by prefix: `books/term-1` and
/// `books/term-2` both fall under the `books` prefix.
///
/// # Example
///
/// ```
/// use salam_grid::cache::CacheKey;
///
/// let key = CacheKey::of(&["books", "term-1"]);
/// assert_eq!(key.as_str(), "books/term-1");
/// assert!(key.has_prefix(&CacheKey::of(&["books"])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds a key from slash-joined segments.
    pub fn of(segments: &[&str]) -> Self {
        Self(segments.join("/"))
    }

    /// The full key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key equals `prefix` or lives under it.
    pub fn has_prefix(&self, prefix: &CacheKey) -> bool {
        self.0 == prefix.0
            || (self.0.starts_with(&prefix.0) && self.0.as_bytes().get(prefix.0.len()) == Some(&b'/'))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A keyed store of fetched collections.
///
/// Values are type-erased so one cache instance can hold collections of
/// different row types; use [`MemoryCache::rows`] for typed access.
pub trait CollectionCache: Send + Sync {
    /// Reads the collection stored under `key`, if present.
    fn get(&self, key: &CacheKey) -> Option<Arc<dyn Any + Send + Sync>>;

    /// Stores a collection under `key`, replacing any previous value.
    fn set(&self, key: &CacheKey, value: Arc<dyn Any + Send + Sync>);

    /// Drops the entry under `key`. Returns `true` if one existed.
    fn invalidate(&self, key: &CacheKey) -> bool;

    /// Drops every entry equal to or under `prefix`. Returns the count.
    fn invalidate_prefix(&self, prefix: &CacheKey) -> usize;
}

/// An in-memory [`CollectionCache`] with invalidation notification.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<CacheKey, Arc<dyn Any + Send + Sync>>>,
    /// Emitted once per invalidated key, after removal. Fetch layers
    /// connect here to schedule refetches.
    pub invalidated: Signal<CacheKey>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a row collection under `key`.
    pub fn set_rows<T: Send + Sync + 'static>(&self, key: &CacheKey, rows: Vec<T>) {
        self.set(key, Arc::new(rows));
    }

    /// Typed read of a row collection stored with [`set_rows`](Self::set_rows).
    ///
    /// Returns `None` when the key is absent or holds a different row type.
    pub fn rows<T: Send + Sync + 'static>(&self, key: &CacheKey) -> Option<Arc<Vec<T>>> {
        self.get(key).and_then(|any| any.downcast::<Vec<T>>().ok())
    }
}

impl CollectionCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<Arc<dyn Any + Send + Sync>> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &CacheKey, value: Arc<dyn Any + Send + Sync>) {
        self.entries.write().insert(key.clone(), value);
    }

    fn invalidate(&self, key: &CacheKey) -> bool {
        let removed = self.entries.write().remove(key).is_some();
        if removed {
            tracing::debug!(target: "salam_grid::cache", key = %key, "cache key invalidated");
            self.invalidated.emit(key.clone());
        }
        removed
    }

    fn invalidate_prefix(&self, prefix: &CacheKey) -> usize {
        let removed: Vec<CacheKey> = {
            let mut entries = self.entries.write();
            let keys: Vec<CacheKey> = entries
                .keys()
                .filter(|key| key.has_prefix(prefix))
                .cloned()
                .collect();
            for key in &keys {
                entries.remove(key);
            }
            keys
        };
        tracing::debug!(
            target: "salam_grid::cache",
            prefix = %prefix,
            count = removed.len(),
            "cache prefix invalidated"
        );
        let count = removed.len();
        for key in removed {
            self.invalidated.emit(key);
        }
        count
    }
}
