//! Key-Value Storage
//!
//! Thin wrapper over the browser's local storage, behind a trait so theme
//! and config persistence can be exercised without a browser.

use crate::error::{DashboardError, Result};

/// String-keyed persistent storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or(DashboardError::NoWindow)?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(DashboardError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| DashboardError::storage(key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| DashboardError::storage(key, e))
    }
}

/// In-memory store standing in for local storage in tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
