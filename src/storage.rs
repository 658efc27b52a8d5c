//! Key-value persistence backends.
//!
//! The page persists everything in `localStorage`, which is a flat string
//! key-value store. `MemoryStore` stands in for it natively and in tests;
//! `BrowserStore` wraps the real thing on wasm32.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{LottoError, Result};

/// Flat string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Default)]
struct MemoryInner {
    items: HashMap<String, String>,
    fail_writes: bool,
}

/// In-memory store. Clones share the same backing map, like two tabs
/// reading the same origin storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `set`/`remove` calls fail, as a full quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().items.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(LottoError::storage_write(format!("quota exceeded writing '{}'", key)));
        }
        inner.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(LottoError::storage_write(format!("cannot remove '{}'", key)));
        }
        inner.items.remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;
    use crate::error::{LottoError, Result};
    use wasm_bindgen::JsValue;

    /// `window.localStorage`.
    #[derive(Clone)]
    pub struct BrowserStore {
        storage: web_sys::Storage,
    }

    fn js_message(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{:?}", err))
    }

    impl BrowserStore {
        /// Fails when there is no window or storage is disabled.
        pub fn from_window() -> Result<Self> {
            let window = web_sys::window()
                .ok_or_else(|| LottoError::storage_write("no window available"))?;
            let storage = window
                .local_storage()
                .map_err(|e| LottoError::storage_write(js_message(&e)))?
                .ok_or_else(|| LottoError::storage_write("localStorage unavailable"))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.storage
                .set_item(key, value)
                .map_err(|e| LottoError::storage_write(js_message(&e)))
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.storage
                .remove_item(key)
                .map_err(|e| LottoError::storage_write(js_message(&e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "1").unwrap();
        assert_eq!(b.get("k").as_deref(), Some("1"));
    }

    #[test]
    fn test_memory_store_write_failure() {
        let store = MemoryStore::new();
        store.set("k", "old").unwrap();
        store.set_fail_writes(true);

        assert!(matches!(store.set("k", "new"), Err(LottoError::StorageWrite(_))));
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k").as_deref(), Some("old"));
    }
}
