//! Token Store: a single localStorage slot holding the raw bearer token. Every
//! other component reads the token through this trait; nothing caches a copy.
//! Without a browser runtime (native builds, prerendering) reads return `None`
//! and writes are dropped, so nothing here can panic outside the browser.

use tracing::warn;

pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// Browser-backed token store keyed by [`AppConfig::token_storage_key`](super::config::AppConfig).
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for LocalTokenStore {
    fn read(&self) -> Option<String> {
        let storage = local_storage()?;
        match storage.get(&self.key) {
            Ok(value) => value.filter(|token| !token.trim().is_empty()),
            Err(err) => {
                warn!(?err, "token slot unreadable");
                None
            }
        }
    }

    fn write(&self, token: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(err) = storage.set(&self.key, token) {
            warn!(?err, "failed to persist token");
        }
    }

    fn clear(&self) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(err) = storage.remove(&self.key) {
            warn!(?err, "failed to clear token");
        }
    }
}

/// Minimal view of `Storage` so the store logic stays target-independent.
trait SlotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

#[cfg(target_arch = "wasm32")]
impl SlotStorage for web_sys::Storage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.get_item(key).map_err(|err| format!("{err:?}"))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.set_item(key, value).map_err(|err| format!("{err:?}"))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.remove_item(key).map_err(|err| format!("{err:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<impl SlotStorage> {
    // Private browsing can refuse storage access entirely.
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<NoStorage> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
enum NoStorage {}

#[cfg(not(target_arch = "wasm32"))]
impl SlotStorage for NoStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, String> {
        match *self {}
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        match *self {}
    }

    fn remove(&self, _key: &str) -> Result<(), String> {
        match *self {}
    }
}
