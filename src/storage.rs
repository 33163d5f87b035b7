//! Key-value persistence port. The engines and views only see the trait;
//! the browser's localStorage and the test fake both implement it.

use std::cell::RefCell;
use std::collections::HashMap;

pub const PROGRESS_KEY: &str = "eng7_progress";
pub const THEME_KEY: &str = "theme";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// localStorage-backed store. Every accessor is best-effort: a browser that
/// blocks storage behaves like an empty store and writes are dropped.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("could not persist {key}");
            }
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
