//! View-preference storage port.
//!
//! The one piece of grid state that outlives a grid instance is the
//! user's view-mode choice. Rather than reaching for an ambient store,
//! the grid takes an injected [`ViewModeStore`], so tests and embedders
//! without durable storage use [`MemoryStore`] and desktop hosts back it
//! with whatever key/value facility they have.
//!
//! Lifecycle is owned by the grid, not the store: the preference is read
//! once at construction and written on every user-driven view-mode
//! change, never on data refresh. Grids sharing a storage key observe
//! each other's last-written value on next construction; that
//! latest-write-wins behavior is intentional.

use std::collections::HashMap;

use parking_lot::RwLock;

/// A durable string key/value store for view preferences.
pub trait ViewModeStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// An in-memory [`ViewModeStore`].
///
/// Backed by a `HashMap`; contents are lost on drop. Useful for tests
/// and for embedders that do not persist preferences.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ViewModeStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        tracing::debug!(target: "salam_grid::storage", key, value, "storing view preference");
        self.entries.write().insert(key.to_string(), value.to_string());
    }
}
