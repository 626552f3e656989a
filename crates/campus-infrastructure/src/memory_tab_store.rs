//! In-memory per-tab store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use campus_core::storage::TabStore;

/// The per-tab volatile key/value store.
///
/// One instance models one tab: values live exactly as long as the store
/// and are never written to disk. Interior mutability keeps the
/// [`TabStore`] trait object-safe behind an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryTabStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryTabStore {
    /// Creates an empty store (a freshly opened tab).
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means a panicking reader died mid-access;
        // the plain-string map is still usable.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TabStore for InMemoryTabStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }

    fn clear(&self) {
        self.entries().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = InMemoryTabStore::new();
        store.set("key", "value");
        assert_eq!(store.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn test_set_replaces() {
        let store = InMemoryTabStore::new();
        store.set("key", "first");
        store.set("key", "second");
        assert_eq!(store.get("key").as_deref(), Some("second"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = InMemoryTabStore::new();
        assert_eq!(store.get("absent"), None);
    }

    #[test]
    fn test_remove() {
        let store = InMemoryTabStore::new();
        store.set("key", "value");
        store.remove("key");
        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn test_clear_drops_everything() {
        let store = InMemoryTabStore::new();
        store.set("a", "1");
        store.set("b", "2");
        store.clear();
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), None);
    }
}
