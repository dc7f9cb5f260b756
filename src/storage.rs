//! Persisted key-value storage
//!
//! String keys to string values, last write wins. In the browser this is
//! `window.localStorage` (see `platform::local_storage`).

use std::collections::HashMap;

/// Origin-scoped string store surviving page reloads
pub trait KeyValueStore {
    /// Read a value; missing keys and read failures are both `None`
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write a value; failures are ignored
    fn set_item(&mut self, key: &str, value: &str);
}

/// In-memory store used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with entries, as if left by an earlier visit
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        store.set_item("club-loulou-theme", "dark");
        store.set_item("club-loulou-theme", "light");
        assert_eq!(store.get_item("club-loulou-theme").as_deref(), Some("light"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_item("missing"), None);
    }
}
