//! `window.localStorage` backend.

use crate::kv::KeyValueStore;
use crate::CacheError;

/// Browser local storage.
///
/// Holds no handle: the `Storage` object is looked up per call so the store
/// stays `Send + Sync` for the reactive runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    /// Check that local storage is reachable and return the store.
    pub fn open() -> Result<Self, CacheError> {
        storage()?;
        Ok(Self)
    }
}

fn storage() -> Result<web_sys::Storage, CacheError> {
    let window =
        web_sys::window().ok_or_else(|| CacheError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| CacheError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| CacheError::Unavailable("localStorage is disabled".to_string()))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        storage()?
            .get_item(key)
            .map_err(|e| CacheError::Store(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        storage()?
            .set_item(key, value)
            .map_err(|e| CacheError::Store(format!("{e:?}")))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        storage()?
            .remove_item(key)
            .map_err(|e| CacheError::Store(format!("{e:?}")))
    }
}
