//! Browser `localStorage` backend
//!
//! Only built for wasm32 with the `web` feature. Every call can throw in the
//! browser (quota exceeded, storage disabled, private mode); thrown values are
//! mapped to [`StoreError`].

use crate::traits::ExternalStore;
use stash_core::StoreError;
use wasm_bindgen::JsValue;

/// `web_sys::Storage` wrapped as an [`ExternalStore`]
#[derive(Clone, Debug)]
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// `window.localStorage`, if the environment exposes it
    pub fn local() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

fn rejected(err: JsValue) -> StoreError {
    let message = err
        .as_string()
        .unwrap_or_else(|| format!("{:?}", err));
    StoreError::Rejected(message)
}

impl ExternalStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(rejected)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(rejected)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(rejected)
    }
}
