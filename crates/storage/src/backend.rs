//! Backend presence detection
//!
//! Whether a store exists at all is decided once, when a cell is bound.
//! [`Backend::Unavailable`] is not an error: it selects a detached cell whose
//! value is fixed to its initial value.

use crate::traits::ExternalStore;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A store handle, or the absence of one
#[derive(Clone, Default)]
pub enum Backend {
    /// A store is present and may be used
    Available(Arc<dyn ExternalStore>),
    /// No store exists in this execution environment
    #[default]
    Unavailable,
}

impl Backend {
    /// Wrap a store
    pub fn new(store: impl ExternalStore + 'static) -> Self {
        Backend::Available(Arc::new(store))
    }

    /// Wrap an already shared store
    pub fn shared(store: Arc<dyn ExternalStore>) -> Self {
        Backend::Available(store)
    }

    /// Probe the environment for a store
    ///
    /// In a browser build (wasm32 with the `web` feature) this returns
    /// `window.localStorage` when it exists. Everywhere else, and in browsers
    /// that deny access to storage, it returns [`Backend::Unavailable`].
    pub fn detect() -> Self {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            if let Some(storage) = crate::web::WebStorage::local() {
                debug!("localStorage detected");
                return Backend::new(storage);
            }
        }
        debug!("no storage backend in this environment");
        Backend::Unavailable
    }

    /// Check whether a store is present
    pub fn is_available(&self) -> bool {
        matches!(self, Backend::Available(_))
    }

    /// Borrow the store, if present
    pub fn store(&self) -> Option<&dyn ExternalStore> {
        match self {
            Backend::Available(store) => Some(store.as_ref()),
            Backend::Unavailable => None,
        }
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Available(_) => f.write_str("Backend::Available"),
            Backend::Unavailable => f.write_str("Backend::Unavailable"),
        }
    }
}
