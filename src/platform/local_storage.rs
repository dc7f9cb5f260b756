//! `window.localStorage` as a [`KeyValueStore`]

use crate::storage::KeyValueStore;

/// Browser LocalStorage; reads and writes become no-ops when it is unavailable
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - preferences will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}
